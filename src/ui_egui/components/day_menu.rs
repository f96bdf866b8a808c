//! Card listing the forecast days, opened from the day selector.

use egui::{Response, Ui, Vec2, Widget};

use super::element::{
    Attributes, BoxStyle, Container, Element, Pressable, ShadowStyle, TextSpan,
};
use super::painter;
use crate::models::day_selection::DaySelection;
use crate::ui_egui::theme::palette;

pub const MENU_TITLE: &str = "Select forecast day";
const CHECK_MARK: &str = "✓";
const CHECK_BADGE_SIZE: f32 = 24.0;
const ROW_PADDING: Vec2 = Vec2::new(16.0, 14.0);

/// Card listing `options`, the one at `selected_index` checked.
///
/// Activating a row calls `on_select_day` with its index and then
/// `on_close`. Like the selector button, the menu keeps no state.
pub struct DayMenu<'a> {
    options: &'a [DaySelection],
    selected_index: usize,
    on_select_day: Option<Box<dyn FnMut(usize) + 'a>>,
    on_close: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> DayMenu<'a> {
    pub fn new(options: &'a [DaySelection], selected_index: usize) -> Self {
        Self {
            options,
            selected_index,
            on_select_day: None,
            on_close: None,
        }
    }

    pub fn on_select_day(mut self, handler: impl FnMut(usize) + 'a) -> Self {
        self.on_select_day = Some(Box::new(handler));
        self
    }

    pub fn on_close(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    fn card_style() -> BoxStyle {
        BoxStyle {
            corner_radius: 16.0,
            background: Some(palette::SURFACE),
            shadow: Some(ShadowStyle {
                offset_y: 4.0,
                blur: 8.0,
                opacity: 0.15,
            }),
            ..Default::default()
        }
    }

    fn header_element() -> Element {
        Element::Row(Container {
            style: BoxStyle {
                padding: ROW_PADDING,
                border_bottom: Some(palette::DIVIDER),
                ..Default::default()
            },
            children: vec![Element::Text(TextSpan {
                text: MENU_TITLE.to_string(),
                size: 15.0,
                color: palette::TEXT_PRIMARY,
                strong: true,
                margin_top: 0.0,
            })],
            ..Default::default()
        })
    }

    fn check_badge() -> Element {
        Element::Row(Container {
            style: BoxStyle {
                width: Some(CHECK_BADGE_SIZE),
                height: Some(CHECK_BADGE_SIZE),
                corner_radius: CHECK_BADGE_SIZE / 2.0,
                background: Some(palette::ACCENT_STRONG),
                ..Default::default()
            },
            centered: true,
            children: vec![Element::Text(TextSpan {
                text: CHECK_MARK.to_string(),
                size: 14.0,
                color: palette::ON_ACCENT,
                strong: true,
                margin_top: 0.0,
            })],
            ..Default::default()
        })
    }

    /// Row for the option at `index`
    pub fn row_element(&self, index: usize) -> Option<Element> {
        let option = self.options.get(index)?;
        let selected = index == self.selected_index;

        let mut children = vec![Element::Column(Container {
            fill: true,
            children: vec![
                Element::Text(TextSpan {
                    text: option.label.clone(),
                    size: 14.0,
                    color: if selected {
                        palette::ACCENT_STRONG
                    } else {
                        palette::LABEL_MUTED
                    },
                    strong: true,
                    margin_top: 0.0,
                }),
                Element::Text(TextSpan {
                    text: option.date_str.clone(),
                    size: 12.0,
                    color: palette::TEXT_MUTED,
                    strong: false,
                    margin_top: 2.0,
                }),
            ],
            ..Default::default()
        })];
        if selected {
            children.push(Self::check_badge());
        }

        Some(Element::Pressable(Pressable {
            style: BoxStyle {
                padding: ROW_PADDING,
                background: selected.then_some(palette::ACCENT_TINT),
                border_bottom: Some(palette::ROW_DIVIDER),
                ..Default::default()
            },
            active_opacity: 0.7,
            attributes: Attributes::new(),
            content: Box::new(Element::Row(Container {
                children,
                ..Default::default()
            })),
        }))
    }

    pub fn element(&self) -> Element {
        let mut children = vec![Self::header_element()];
        children.extend((0..self.options.len()).filter_map(|idx| self.row_element(idx)));

        Element::Column(Container {
            style: Self::card_style(),
            children,
            ..Default::default()
        })
    }
}

impl Widget for DayMenu<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let mut activated = None;

        let card = painter::frame_for(&Self::card_style()).show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            painter::paint(ui, &Self::header_element());
            for idx in 0..self.options.len() {
                if let Some(row) = self.row_element(idx) {
                    if painter::paint(ui, &row).clicked() {
                        activated = Some(idx);
                    }
                }
            }
        });

        if let Some(idx) = activated {
            log::debug!("Day menu row {} activated", idx);
            if let Some(on_select_day) = self.on_select_day.as_mut() {
                on_select_day(idx);
            }
            if let Some(on_close) = self.on_close.as_mut() {
                on_close();
            }
        }

        card.response
    }
}
