//! TOML-based configuration for the front-end.
//!
//! Reads `FrontendConfig` from an optional config file next to the app data:
//!
//! ```toml
//! log_level = "debug"
//!
//! [[buttons]]
//! element = "btn-up"
//! code = "Up"
//!
//! [[buttons]]
//! element = "btn-down"
//! code = "Down"
//! ```
//!
//! Every field has a serde default so the app works on first run, before a
//! config file exists, and keeps working when an older file is missing newer
//! fields. A missing file is not an error: [`load_config`] falls back to
//! [`FrontendConfig::default`], which binds the two stock buttons.
//!
//! Note that `code` deserializes into the closed
//! [`InputCode`](padbridge_core::InputCode) enumeration — a typo like
//! `code = "Upp"` fails at parse time instead of producing an unknown id at
//! the boundary.

use std::path::{Path, PathBuf};

use padbridge_core::InputCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level front-end configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrontendConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Button-to-code bindings for the gesture router.
    #[serde(default = "default_buttons")]
    pub buttons: Vec<ButtonEntry>,
}

/// Binds one interactive element to a logical input code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonEntry {
    /// Toolkit-side id of the element (matches `GestureNotice::element`).
    pub element: String,
    /// The code forwarded while the element's gesture is held.
    pub code: InputCode,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            buttons: default_buttons(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The stock layout: one button per code, ids matching the shipped screen.
fn default_buttons() -> Vec<ButtonEntry> {
    vec![
        ButtonEntry {
            element: "btn-up".to_string(),
            code: InputCode::Up,
        },
        ButtonEntry {
            element: "btn-down".to_string(),
            code: InputCode::Down,
        },
    ]
}

/// Loads the config from `path`, falling back to defaults if it is absent.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for any I/O failure other than the file not
/// existing, and [`ConfigError::Parse`] for malformed TOML.
pub fn load_config(path: &Path) -> Result<FrontendConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FrontendConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(toml::from_str(&text)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_binds_both_stock_buttons() {
        // Arrange / Act
        let config = FrontendConfig::default();

        // Assert
        assert_eq!(config.log_level, "info");
        let codes: Vec<InputCode> = config.buttons.iter().map(|b| b.code).collect();
        assert_eq!(codes, vec![InputCode::Up, InputCode::Down]);
    }

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let text = r#"
            log_level = "debug"

            [[buttons]]
            element = "left-pad"
            code = "Up"

            [[buttons]]
            element = "right-pad"
            code = "Down"
        "#;

        // Act
        let config: FrontendConfig = toml::from_str(text).unwrap();

        // Assert
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].element, "left-pad");
        assert_eq!(config.buttons[0].code, InputCode::Up);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // Arrange – an empty file is a valid config
        let text = "";

        // Act
        let config: FrontendConfig = toml::from_str(text).unwrap();

        // Assert
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    fn test_unknown_code_name_is_rejected_at_parse_time() {
        // Arrange
        let text = r#"
            [[buttons]]
            element = "btn-up"
            code = "Sideways"
        "#;

        // Act
        let result: Result<FrontendConfig, _> = toml::from_str(text);

        // Assert – the closed vocabulary catches the typo here, not at the boundary
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_falls_back_to_defaults_when_file_is_absent() {
        // Arrange
        let path = Path::new("/nonexistent/padbridge/config.toml");

        // Act
        let config = load_config(path).unwrap();

        // Assert
        assert_eq!(config, FrontendConfig::default());
    }
}
