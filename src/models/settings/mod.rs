//! Settings for the component gallery.
//!
//! Stored as TOML. Every field has a default so a partial file, or none at
//! all, still yields a usable configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the forecast days the gallery offers
pub const MAX_FORECAST_DAYS: usize = 14;

/// One page of the intro carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroSlide {
    /// Icon name shown above the title
    pub icon: String,
    pub title: String,
    pub body: String,
}

impl IntroSlide {
    pub fn new(icon: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// "light" or "dark"
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Number of days offered by the day selector, today included
    pub forecast_days: usize,
    /// Intro slide shown first
    pub start_slide: usize,
    pub slides: Vec<IntroSlide>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            window_width: 420.0,
            window_height: 760.0,
            forecast_days: 7,
            start_slide: 0,
            slides: default_slides(),
        }
    }
}

impl GallerySettings {
    /// Validate the settings data.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.forecast_days == 0 || self.forecast_days > MAX_FORECAST_DAYS {
            return Err(SettingsValidationError::ForecastDays(self.forecast_days));
        }
        if self.slides.is_empty() {
            return Err(SettingsValidationError::NoSlides);
        }
        if self.start_slide >= self.slides.len() {
            return Err(SettingsValidationError::StartSlide {
                start: self.start_slide,
                count: self.slides.len(),
            });
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsValidationError::WindowSize);
        }
        Ok(())
    }
}

/// Validation errors for GallerySettings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("forecast_days must be between 1 and 14, got {0}")]
    ForecastDays(usize),
    #[error("at least one intro slide is required")]
    NoSlides,
    #[error("start_slide {start} is out of range for {count} slides")]
    StartSlide { start: usize, count: usize },
    #[error("window size must be positive")]
    WindowSize,
}

/// Intro slides that ship with the gallery.
pub fn default_slides() -> Vec<IntroSlide> {
    vec![
        IntroSlide::new(
            "wind",
            "Breathe easier",
            "Follow PM2.5 and the air quality index around you, updated through the day.",
        ),
        IntroSlide::new(
            "map-pin",
            "Stations near you",
            "Tap a monitoring station on the map to see its readings and health advice.",
        ),
        IntroSlide::new(
            "calendar",
            "Plan ahead",
            "Switch between forecast days to see how the air is expected to change.",
        ),
    ]
}
