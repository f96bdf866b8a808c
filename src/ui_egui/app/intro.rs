//! Intro carousel: current slide, pagination dots and prev/next buttons.

use egui::{Align, Layout, RichText};

use super::state::{GalleryAction, GalleryState};
use crate::models::settings::IntroSlide;
use crate::ui_egui::components::{IconButton, PaginationIndicator, StyleOverride};
use crate::ui_egui::icons;
use crate::ui_egui::theme::{palette, GalleryTheme};

pub(super) fn render_intro(
    ui: &mut egui::Ui,
    state: &GalleryState,
    slides: &[IntroSlide],
    theme: GalleryTheme,
    actions: &mut Vec<GalleryAction>,
) {
    if let Some(slide) = state.pagination.active_index().and_then(|idx| slides.get(idx)) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(icons::glyph(&slide.icon))
                    .size(56.0)
                    .color(palette::ACCENT),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(&slide.title)
                    .size(22.0)
                    .strong()
                    .color(theme.text()),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&slide.body).size(14.0).color(palette::TEXT_SECONDARY));
        });
    }

    ui.add(PaginationIndicator::from_state(state.pagination));

    let flat = StyleOverride {
        elevated: Some(false),
        ..Default::default()
    };

    ui.horizontal(|ui| {
        ui.add_enabled_ui(state.pagination.has_previous(), |ui| {
            ui.add(
                IconButton::new("arrow-left")
                    .style(flat)
                    .attribute("tooltip", "Previous")
                    .on_press(|| actions.push(GalleryAction::PreviousSlide)),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_enabled_ui(state.pagination.has_next(), |ui| {
                ui.add(
                    IconButton::new("arrow-right")
                        .background_color(palette::ACCENT)
                        .color(palette::SURFACE)
                        .attribute("tooltip", "Next")
                        .on_press(|| actions.push(GalleryAction::NextSlide)),
                );
            });
        });
    });
}
