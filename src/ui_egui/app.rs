mod forecast;
mod intro;
mod state;

pub use self::state::{GalleryAction, GalleryState};

use crate::models::settings::GallerySettings;
use crate::ui_egui::theme::GalleryTheme;
use chrono::Local;
use egui::RichText;

/// Desktop host that composes the components the way a parent screen does
pub struct GalleryApp {
    settings: GallerySettings,
    theme: GalleryTheme,
    state: GalleryState,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: GallerySettings) -> Self {
        let theme = GalleryTheme::from_name(&settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let state = GalleryState::new(&settings, Local::now().date_naive());
        log::info!(
            "Gallery ready: {} slides, {} forecast days, {:?} theme",
            settings.slides.len(),
            state.day_options.len(),
            theme
        );

        Self {
            settings,
            theme,
            state,
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("forecast_bar")
            .frame(egui::Frame::none().inner_margin(12.0).fill(self.theme.app_background()))
            .show(ctx, |ui| {
                forecast::render_top_bar(ui, &self.state, &mut actions);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let last = self
                        .state
                        .last_action
                        .map(GalleryAction::describe)
                        .unwrap_or("No activations yet");
                    ui.label(RichText::new(last).small());
                    ui.separator();
                    ui.label(RichText::new(format!("{} presses", self.state.press_count)).small());
                    if let Some(iso) = self.state.selected_day().and_then(|d| d.iso_date()) {
                        ui.separator();
                        ui.label(RichText::new(iso).small());
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            intro::render_intro(ui, &self.state, &self.settings.slides, self.theme, &mut actions);
        });

        for action in actions {
            self.state.apply(action);
        }
    }
}
