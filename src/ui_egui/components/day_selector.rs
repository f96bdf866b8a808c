//! Button showing the selected forecast day with an open/closed chevron.

use egui::{Response, Ui, Vec2, Widget};

use super::element::{
    Attributes, BoxStyle, Container, Element, IconSpec, Pressable, ShadowStyle, TextSpan,
};
use super::painter;
use crate::models::day_selection::DaySelection;
use crate::ui_egui::theme::palette;

const ICON_SIZE: f32 = 18.0;
const ACTIVE_OPACITY: f32 = 0.8;

/// Chevron icon name for the menu state the parent reports
pub fn chevron_icon(is_open: bool) -> &'static str {
    if is_open {
        "chevron-up"
    } else {
        "chevron-down"
    }
}

/// Tappable row with a calendar glyph, the day label and date, and a
/// chevron. The parent owns `is_open` and flips it from `on_press`.
pub struct DaySelectorButton<'a> {
    selected_day: &'a DaySelection,
    is_open: bool,
    on_press: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> DaySelectorButton<'a> {
    pub fn new(selected_day: &'a DaySelection, is_open: bool) -> Self {
        Self {
            selected_day,
            is_open,
            on_press: None,
        }
    }

    /// Set the activation handler
    pub fn on_press(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn element(&self) -> Element {
        let text_column = Element::Column(Container {
            fill: true,
            children: vec![
                Element::Text(TextSpan {
                    text: self.selected_day.label.clone(),
                    size: 13.0,
                    color: palette::TEXT_PRIMARY,
                    strong: true,
                    margin_top: 0.0,
                }),
                Element::Text(TextSpan {
                    text: self.selected_day.date_str.clone(),
                    size: 11.0,
                    color: palette::TEXT_SECONDARY,
                    strong: false,
                    margin_top: 2.0,
                }),
            ],
            ..Default::default()
        });

        let content = Element::Row(Container {
            gap: 8.0,
            children: vec![
                Element::Icon(IconSpec {
                    name: "calendar".to_string(),
                    size: ICON_SIZE,
                    color: palette::CALENDAR_ICON,
                }),
                text_column,
                Element::Icon(IconSpec {
                    name: chevron_icon(self.is_open).to_string(),
                    size: ICON_SIZE,
                    color: palette::TEXT_SECONDARY,
                }),
            ],
            ..Default::default()
        });

        Element::Pressable(Pressable {
            style: BoxStyle {
                padding: Vec2::new(14.0, 10.0),
                corner_radius: 12.0,
                background: Some(palette::SURFACE),
                shadow: Some(ShadowStyle {
                    offset_y: 2.0,
                    blur: 4.0,
                    opacity: 0.1,
                }),
                ..Default::default()
            },
            active_opacity: ACTIVE_OPACITY,
            attributes: Attributes::new(),
            content: Box::new(content),
        })
    }
}

impl Widget for DaySelectorButton<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let response = painter::paint(ui, &self.element());
        if response.clicked() {
            if let Some(on_press) = self.on_press.as_mut() {
                on_press();
            }
        }
        response
    }
}
