//! Forecast day options for the day selector.
//!
//! Produces one [`DaySelection`] per day starting at `today`: the first two
//! are labelled "Today" and "Tomorrow", the rest by weekday name.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::day_selection::DaySelection;

/// Number of days offered when the caller has no preference
pub const DEFAULT_DAY_COUNT: usize = 7;

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Label for the day `offset` days after today
pub fn day_label(date: NaiveDate, offset: usize) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => weekday_name(date.weekday()).to_string(),
    }
}

/// Build `count` consecutive day options starting at `today`.
pub fn create_day_options(today: NaiveDate, count: usize) -> Vec<DaySelection> {
    (0..count)
        .map_while(|offset| {
            let date = today.checked_add_signed(Duration::days(offset as i64))?;
            Some(DaySelection::for_date(
                day_label(date, offset),
                date.format("%d/%m").to_string(),
                date,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_two_labels() {
        let options = create_day_options(date(2025, 1, 1), DEFAULT_DAY_COUNT);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].label, "Today");
        assert_eq!(options[1].label, "Tomorrow");
        // 2025-01-03 is a Friday
        assert_eq!(options[2].label, "Friday");
    }

    #[test]
    fn test_zero_count() {
        assert!(create_day_options(date(2025, 1, 1), 0).is_empty());
    }

    #[test]
    fn test_dates_are_consecutive() {
        let options = create_day_options(date(2025, 2, 27), 4);
        let dates: Vec<_> = options.iter().map(|o| o.date.unwrap()).collect();
        assert_eq!(
            dates,
            vec![date(2025, 2, 27), date(2025, 2, 28), date(2025, 3, 1), date(2025, 3, 2)]
        );
    }
}
