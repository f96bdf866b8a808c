//! Top bar: day selector, map buttons, and the day menu overlay.

use std::cell::RefCell;

use egui::{Id, Order, Vec2};

use super::state::{GalleryAction, GalleryState};
use crate::ui_egui::components::{DayMenu, DaySelectorButton, IconButton};
use crate::ui_egui::theme::palette;

const MENU_OFFSET: f32 = 8.0;
const DAY_MENU_ID: &str = "day_menu";

pub(super) fn render_top_bar(
    ui: &mut egui::Ui,
    state: &GalleryState,
    actions: &mut Vec<GalleryAction>,
) {
    let Some(selected_day) = state.selected_day() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let selector_width = (ui.available_width() - 3.0 * 48.0).max(120.0);
        let selector = ui.allocate_ui(Vec2::new(selector_width, 48.0), |ui| {
            ui.add(
                DaySelectorButton::new(selected_day, state.day_menu_open)
                    .on_press(|| actions.push(GalleryAction::ToggleDayMenu)),
            )
        });

        ui.add(
            IconButton::new("layers")
                .background_color(if state.layers_visible {
                    palette::ACCENT_TINT
                } else {
                    palette::SURFACE
                })
                .attribute("tooltip", "Map layers")
                .on_press(|| actions.push(GalleryAction::ToggleLayers)),
        );
        ui.add(
            IconButton::new("crosshair")
                .attribute("tooltip", "Locate me")
                .attribute("test_id", "locate-button")
                .on_press(|| actions.push(GalleryAction::Locate)),
        );
        ui.add(
            IconButton::new("refresh-cw")
                .attribute("tooltip", "Refresh")
                .on_press(|| actions.push(GalleryAction::Refresh)),
        );

        if state.day_menu_open {
            let anchor = selector.inner.rect.left_bottom() + Vec2::new(0.0, MENU_OFFSET);
            let width = selector.inner.rect.width();
            // Both menu callbacks are alive at once, so they share the queue
            let menu_actions = RefCell::new(Vec::new());
            egui::Area::new(Id::new(DAY_MENU_ID))
                .order(Order::Foreground)
                .fixed_pos(anchor)
                .show(ui.ctx(), |ui| {
                    ui.set_width(width);
                    ui.add(
                        DayMenu::new(&state.day_options, state.selected_day)
                            .on_select_day(|idx| {
                                menu_actions
                                    .borrow_mut()
                                    .push(GalleryAction::SelectDay(idx))
                            })
                            .on_close(|| {
                                menu_actions.borrow_mut().push(GalleryAction::CloseDayMenu)
                            }),
                    );
                });
            actions.extend(menu_actions.into_inner());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::GallerySettings;
    use chrono::NaiveDate;
    use egui::{pos2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};

    fn open_menu_state() -> GalleryState {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut state = GalleryState::new(&GallerySettings::default(), today);
        state.day_menu_open = true;
        state
    }

    fn run_frame(
        ctx: &egui::Context,
        state: &GalleryState,
        time: f64,
        events: Vec<Event>,
    ) -> Vec<GalleryAction> {
        let mut actions = Vec::new();
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(480.0, 900.0))),
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_top_bar(ui, state, &mut actions);
            });
        });
        actions
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_menu_row_tap_queues_select_then_close() {
        let ctx = egui::Context::default();
        let state = open_menu_state();

        // New areas settle their size over the first frames
        run_frame(&ctx, &state, 0.0, Vec::new());
        run_frame(&ctx, &state, 0.1, Vec::new());
        let menu = ctx
            .memory(|mem| mem.area_rect(Id::new(DAY_MENU_ID)))
            .expect("day menu area shown");

        let last_row = pos2(menu.center().x, menu.bottom() - 20.0);
        let mut actions = run_frame(
            &ctx,
            &state,
            0.2,
            vec![Event::PointerMoved(last_row), primary(last_row, true)],
        );
        actions.extend(run_frame(&ctx, &state, 0.3, vec![primary(last_row, false)]));

        let last = state.day_options.len() - 1;
        assert_eq!(
            actions,
            vec![GalleryAction::SelectDay(last), GalleryAction::CloseDayMenu]
        );
    }

    #[test]
    fn test_closed_menu_is_not_shown() {
        let ctx = egui::Context::default();
        let mut state = open_menu_state();
        state.day_menu_open = false;

        run_frame(&ctx, &state, 0.0, Vec::new());
        assert!(ctx
            .memory(|mem| mem.area_rect(Id::new(DAY_MENU_ID)))
            .is_none());
    }
}
