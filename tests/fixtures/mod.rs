// Test fixtures - reusable test data and a headless egui driver
// Shared by the integration test files

#![allow(dead_code)]

use std::cell::Cell;

use aqi_widgets::models::day_selection::DaySelection;
use chrono::NaiveDate;
use egui::epaint::ClippedShape;
use egui::{Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

/// Sample days for testing
pub mod days {
    use super::*;

    /// The day used throughout the selector tests
    pub fn monday() -> DaySelection {
        DaySelection::new("Mon", "Jan 1")
    }

    /// Wednesday, Jan 1 2025
    pub fn new_year_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Saturday, Dec 27 2025 - a week from here crosses the year end
    pub fn late_december_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 27).unwrap()
    }

    /// Tuesday, Feb 27 2024 - a week from here crosses the leap day
    pub fn before_leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }
}

/// Runs egui frames without a window so tests can click widgets.
///
/// Widgets are hit-tested against the layout of the previous frame, so
/// [`Harness::click`] always lays out once before pressing.
pub struct Harness {
    ctx: egui::Context,
    screen: Rect,
    time: Cell<f64>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            screen: Rect::from_min_size(Pos2::ZERO, Vec2::new(480.0, 640.0)),
            time: Cell::new(0.0),
        }
    }

    /// Run one frame with `events`, returning the rect of whatever
    /// `add_contents` reports
    pub fn frame(
        &self,
        events: Vec<Event>,
        add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect,
    ) -> Rect {
        self.run(events, add_contents).0
    }

    fn run(
        &self,
        events: Vec<Event>,
        add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect,
    ) -> (Rect, FullOutput) {
        self.time.set(self.time.get() + 1.0 / 60.0);
        let input = RawInput {
            screen_rect: Some(self.screen),
            time: Some(self.time.get()),
            events,
            ..Default::default()
        };

        let mut rect = Rect::NOTHING;
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = add_contents(ui);
            });
        });
        (rect, output)
    }

    /// Shapes painted by one frame with no input
    pub fn idle_shapes(
        &self,
        add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect,
    ) -> Vec<ClippedShape> {
        self.run(Vec::new(), add_contents).1.shapes
    }

    /// Press the primary button on the reported rect and keep it down.
    /// Returns the shapes of the press frame and of one held frame after it.
    pub fn hold(&self, add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect) -> Vec<ClippedShape> {
        let rect = self.idle(add_contents);
        let pos = rect.center();
        let (_, pressed) = self.run(
            vec![Event::PointerMoved(pos), button_event(pos, true)],
            add_contents,
        );
        let (_, held) = self.run(Vec::new(), add_contents);
        pressed.shapes.into_iter().chain(held.shapes).collect()
    }

    /// Frame with no input
    pub fn idle(&self, add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect) -> Rect {
        self.frame(Vec::new(), add_contents)
    }

    /// Press and release the primary button on the center of the rect
    /// `add_contents` reports. Runs three frames: layout, press, release.
    pub fn click(&self, add_contents: &mut dyn FnMut(&mut egui::Ui) -> Rect) {
        let rect = self.idle(add_contents);
        let pos = rect.center();
        self.frame(
            vec![Event::PointerMoved(pos), button_event(pos, true)],
            add_contents,
        );
        self.frame(vec![button_event(pos, false)], add_contents);
    }
}

fn button_event(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}
