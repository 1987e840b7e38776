//! Configuration for the contact book.
//!
//! Read once at startup from `~/.contacts/config.toml`. The file is optional
//! and never written by the application.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use contacts_types::{Route, ui::UiOptions};

/// Environment variable consulted when the config file has no `start_screen`.
pub const START_SCREEN_ENV: &str = "CONTACTS_START_SCREEN";

#[derive(Debug, Default, Deserialize)]
pub struct ContactsConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Screen shown at launch: "list" or "add".
    pub start_screen: Option<String>,
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal animations and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl ContactsConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    /// Raw `start_screen` value from the `[app]` table, if set.
    #[must_use]
    pub fn start_screen(&self) -> Option<&str> {
        self.app.as_ref()?.start_screen.as_deref()
    }
}

/// Resolve the start screen from the config and `CONTACTS_START_SCREEN`.
#[must_use]
pub fn resolve_start_screen(config: Option<&ContactsConfig>) -> Route {
    let env_value = env::var(START_SCREEN_ENV).ok();
    resolve_start_screen_from(config, env_value.as_deref())
}

/// A `start_screen` set in the config wins; the environment value is only
/// consulted when the config leaves it unset. Unknown values fall back to the
/// contact list with a warning.
#[must_use]
pub fn resolve_start_screen_from(
    config: Option<&ContactsConfig>,
    env_value: Option<&str>,
) -> Route {
    let (raw, source) = match config.and_then(ContactsConfig::start_screen) {
        Some(raw) => (raw, "config"),
        None => match env_value {
            Some(raw) => (raw, START_SCREEN_ENV),
            None => return Route::default(),
        },
    };
    Route::parse(raw).unwrap_or_else(|| {
        tracing::warn!(source, "Unknown start screen {:?}, showing the contact list", raw);
        Route::default()
    })
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".contacts").join("config.toml"))
}
