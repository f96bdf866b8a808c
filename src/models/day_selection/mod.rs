//! Day selection model shared by the day selector button and the day menu.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A forecast day as shown to the user.
///
/// `label` is a short name ("Today", "Tuesday"), `date_str` the formatted
/// date next to it. `date` is set when the selection was generated from a
/// calendar date; it is never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelection {
    pub label: String,
    pub date_str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl DaySelection {
    /// Create a selection from display strings only
    pub fn new(label: impl Into<String>, date_str: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            date_str: date_str.into(),
            date: None,
        }
    }

    /// Create a selection backed by a calendar date
    pub fn for_date(label: impl Into<String>, date_str: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            date_str: date_str.into(),
            date: Some(date),
        }
    }

    /// The backing date as `YYYY-MM-DD`, the form forecast layers are keyed by
    pub fn iso_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_date() {
        let day = DaySelection::new("Mon", "Jan 1");
        assert_eq!(day.label, "Mon");
        assert_eq!(day.date_str, "Jan 1");
        assert!(day.iso_date().is_none());
    }

    #[test]
    fn test_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let day = DaySelection::for_date("Sunday", "09/03", date);
        assert_eq!(day.iso_date().as_deref(), Some("2025-03-09"));
    }

    #[test]
    fn test_serde_skips_missing_date() {
        let day = DaySelection::new("Mon", "Jan 1");
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, r#"{"label":"Mon","date_str":"Jan 1"}"#);

        let back: DaySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }
}
