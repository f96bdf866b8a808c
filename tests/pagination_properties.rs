// Property-based tests for the pagination indicator
// Random totals and indices, in and out of range

use aqi_widgets::ui_egui::components::{Element, PaginationIndicator};
use proptest::prelude::*;

fn active_positions(total: usize, current: isize) -> (usize, Vec<usize>) {
    let element = PaginationIndicator::new(total, current).element();
    let dots: Vec<_> = element
        .descendants()
        .into_iter()
        .filter_map(Element::as_dot)
        .collect();
    let active = dots
        .iter()
        .enumerate()
        .filter(|(_, d)| d.active)
        .map(|(i, _)| i)
        .collect();
    (dots.len(), active)
}

proptest! {
    /// Property: an in-range index yields `total` dots with exactly one
    /// active, at that index
    #[test]
    fn prop_in_range_highlights_exactly_one(
        (total, current) in (1usize..64).prop_flat_map(|t| (Just(t), 0..t)),
    ) {
        let (count, active) = active_positions(total, current as isize);
        prop_assert_eq!(count, total);
        prop_assert_eq!(active, vec![current]);
    }

    /// Property: an index at or past the end highlights nothing
    #[test]
    fn prop_past_end_highlights_nothing(
        total in 0usize..64,
        overshoot in 0isize..1000,
    ) {
        let (count, active) = active_positions(total, total as isize + overshoot);
        prop_assert_eq!(count, total);
        prop_assert!(active.is_empty());
    }

    /// Property: a negative index highlights nothing
    #[test]
    fn prop_negative_highlights_nothing(
        total in 0usize..64,
        current in isize::MIN..0,
    ) {
        let (count, active) = active_positions(total, current);
        prop_assert_eq!(count, total);
        prop_assert!(active.is_empty());
    }

    /// Property: every dot shares height and margin; only width and color
    /// mark the active one
    #[test]
    fn prop_dots_share_geometry(
        (total, current) in (1usize..32).prop_flat_map(|t| (Just(t), 0..t)),
    ) {
        let element = PaginationIndicator::new(total, current as isize).element();
        let dots: Vec<_> = element
            .descendants()
            .into_iter()
            .filter_map(Element::as_dot)
            .collect();
        let idle: Vec<_> = dots.iter().filter(|d| !d.active).collect();
        for dot in &dots {
            prop_assert_eq!(dot.height, dots[0].height);
            prop_assert_eq!(dot.margin_x, dots[0].margin_x);
        }
        if let Some(first_idle) = idle.first() {
            prop_assert!(dots[current].width > first_idle.width);
            prop_assert!(dots[current].color != first_idle.color);
        }
    }
}
