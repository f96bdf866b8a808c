pub mod service;

pub use service::{SettingsError, SettingsService};
