//! Row of dots marking the current page of a carousel.

use egui::{Response, Ui, Vec2, Widget};

use super::element::{BoxStyle, Container, Dot, Element};
use super::painter;
use crate::models::pagination::PaginationState;
use crate::ui_egui::theme::palette;

const DOT_SIZE: f32 = 8.0;
const ACTIVE_DOT_WIDTH: f32 = 24.0;
const DOT_MARGIN: f32 = 4.0;
const ROW_PADDING_Y: f32 = 20.0;

/// Dots for `total` pages with the one at `current_index` highlighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationIndicator {
    state: PaginationState,
}

impl PaginationIndicator {
    pub fn new(total: usize, current_index: isize) -> Self {
        Self::from_state(PaginationState::new(total, current_index))
    }

    pub fn from_state(state: PaginationState) -> Self {
        Self { state }
    }

    pub fn element(&self) -> Element {
        let dots = (0..self.state.total)
            .map(|index| Element::Dot(dot(self.state.is_active(index))))
            .collect();

        Element::Row(Container {
            style: BoxStyle {
                padding: Vec2::new(0.0, ROW_PADDING_Y),
                ..Default::default()
            },
            gap: 0.0,
            centered: true,
            fill: false,
            children: dots,
        })
    }
}

fn dot(active: bool) -> Dot {
    Dot {
        width: if active { ACTIVE_DOT_WIDTH } else { DOT_SIZE },
        height: DOT_SIZE,
        corner_radius: DOT_SIZE / 2.0,
        color: if active {
            palette::ACCENT
        } else {
            palette::DOT_INACTIVE
        },
        margin_x: DOT_MARGIN,
        active,
    }
}

impl Widget for PaginationIndicator {
    fn ui(self, ui: &mut Ui) -> Response {
        painter::paint(ui, &self.element())
    }
}
