use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::{GallerySettings, SettingsValidationError};

const SETTINGS_FILE_NAME: &str = "gallery.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] SettingsValidationError),
}

/// Loads and stores [`GallerySettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `gallery.toml` in the platform config directory,
    /// or the working directory when no home directory can be resolved.
    pub fn from_default_location() -> Self {
        let path = match ProjectDirs::from("com", "AqiWidgets", "Gallery") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE_NAME),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for settings");
                PathBuf::from(SETTINGS_FILE_NAME)
            }
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<GallerySettings, SettingsError> {
        if !self.path.exists() {
            log::debug!("No settings file at {:?}, using defaults", self.path);
            return Ok(GallerySettings::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings: GallerySettings =
            toml::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Get the current settings, falling back to defaults on any error
    pub fn get_or_default(&self) -> GallerySettings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                GallerySettings::default()
            }
        }
    }

    /// Update settings
    pub fn update(&self, settings: &GallerySettings) -> Result<(), SettingsError> {
        settings.validate()?;

        let raw = toml::to_string_pretty(settings)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, raw).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("missing.toml"));
        assert_eq!(service.get().unwrap(), GallerySettings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "theme = \"dark\"\nforecast_days = 5\n").unwrap();

        let settings = SettingsService::new(&path).get().unwrap();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.forecast_days, 5);
        assert_eq!(settings.slides, GallerySettings::default().slides);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "forecast_days = \"seven\"").unwrap();

        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "forecast_days = 30").unwrap();

        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(SettingsValidationError::ForecastDays(30))
        ));
    }

    #[test]
    fn test_get_or_default_swallows_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "not toml at all [").unwrap();

        let settings = SettingsService::new(&path).get_or_default();
        assert_eq!(settings, GallerySettings::default());
    }

    #[test]
    fn test_update_then_get() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("gallery.toml"));

        let mut settings = GallerySettings::default();
        settings.theme = "dark".to_string();
        settings.start_slide = 2;
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("gallery.toml"));

        let settings = GallerySettings {
            forecast_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            service.update(&settings),
            Err(SettingsError::Invalid(_))
        ));
        assert!(!service.path().exists());
    }
}
