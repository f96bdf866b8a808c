use chrono::NaiveDate;

use crate::models::day_selection::DaySelection;
use crate::models::pagination::PaginationState;
use crate::models::settings::GallerySettings;
use crate::services::day_options::create_day_options;

/// Something the user did in the gallery this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    PreviousSlide,
    NextSlide,
    ToggleDayMenu,
    SelectDay(usize),
    CloseDayMenu,
    Locate,
    ToggleLayers,
    Refresh,
}

impl GalleryAction {
    pub fn describe(self) -> &'static str {
        match self {
            GalleryAction::PreviousSlide => "Previous slide",
            GalleryAction::NextSlide => "Next slide",
            GalleryAction::ToggleDayMenu => "Toggled day menu",
            GalleryAction::SelectDay(_) => "Selected a forecast day",
            GalleryAction::CloseDayMenu => "Closed day menu",
            GalleryAction::Locate => "Locate me",
            GalleryAction::ToggleLayers => "Toggled map layers",
            GalleryAction::Refresh => "Refresh",
        }
    }

    /// Whether this action stands for a press of its own. A day menu row
    /// sends `SelectDay` then `CloseDayMenu` for one tap.
    pub fn is_press(self) -> bool {
        !matches!(self, GalleryAction::CloseDayMenu)
    }
}

/// State the gallery owns on behalf of its components
pub struct GalleryState {
    pub pagination: PaginationState,
    pub day_options: Vec<DaySelection>,
    pub selected_day: usize,
    pub day_menu_open: bool,
    pub layers_visible: bool,
    pub last_action: Option<GalleryAction>,
    /// Activations seen since start, by any component
    pub press_count: u64,
}

impl GalleryState {
    pub fn new(settings: &GallerySettings, today: NaiveDate) -> Self {
        Self {
            pagination: PaginationState::new(settings.slides.len(), settings.start_slide as isize),
            day_options: create_day_options(today, settings.forecast_days),
            selected_day: 0,
            day_menu_open: false,
            layers_visible: true,
            last_action: None,
            press_count: 0,
        }
    }

    pub fn selected_day(&self) -> Option<&DaySelection> {
        self.day_options.get(self.selected_day)
    }

    pub fn apply(&mut self, action: GalleryAction) {
        log::debug!("Gallery action: {:?}", action);
        if action.is_press() {
            self.press_count += 1;
        }
        self.last_action = Some(action);

        match action {
            GalleryAction::PreviousSlide => self.pagination = self.pagination.previous(),
            GalleryAction::NextSlide => self.pagination = self.pagination.next(),
            GalleryAction::ToggleDayMenu => self.day_menu_open = !self.day_menu_open,
            GalleryAction::SelectDay(idx) => {
                if idx < self.day_options.len() {
                    self.selected_day = idx;
                } else {
                    log::warn!("Ignoring selection of missing day option {}", idx);
                }
            }
            GalleryAction::CloseDayMenu => self.day_menu_open = false,
            GalleryAction::ToggleLayers => self.layers_visible = !self.layers_visible,
            GalleryAction::Locate | GalleryAction::Refresh => {}
        }
    }
}
