//! Configuration loading for chatline.
//!
//! Configuration comes from an optional `chatline.toml` in the working
//! directory (or an explicit `--config` path). Every field has a default, so
//! a missing file simply yields [`ChatlineConfig::default`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub mod constants;

use constants::{backend, messages, quick_actions};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "chatline.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatlineConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

/// Where the opaque chat backend lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; the `/api/chat` and `/api/health` paths are fixed.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: backend::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Presentation settings for the session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// The transcript sentinel; survives a clear operation.
    pub welcome_message: String,
    /// Preset messages bound to Alt+1..Alt+9, in order.
    pub quick_actions: Vec<QuickAction>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            welcome_message: messages::DEFAULT_WELCOME.to_string(),
            quick_actions: QuickAction::defaults(),
        }
    }
}

/// A preset message bound to a one-keystroke shortcut.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuickAction {
    /// Short label shown in the footer hint.
    pub label: String,
    /// The message submitted when the action fires.
    pub message: String,
}

impl QuickAction {
    fn defaults() -> Vec<Self> {
        quick_actions::DEFAULTS
            .iter()
            .map(|(label, message)| Self {
                label: (*label).to_string(),
                message: (*message).to_string(),
            })
            .collect()
    }
}

impl ChatlineConfig {
    /// Load configuration.
    ///
    /// With an explicit path, read errors and parse errors propagate. Without
    /// one, a missing `chatline.toml` in the working directory is not an
    /// error; defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_path(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::load_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and parse a specific config file.
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_field() {
        let config = ChatlineConfig::default();
        assert_eq!(config.backend.base_url, backend::DEFAULT_BASE_URL);
        assert_eq!(config.ui.welcome_message, messages::DEFAULT_WELCOME);
        assert_eq!(config.ui.quick_actions.len(), quick_actions::DEFAULTS.len());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[backend]\nbase_url = \"http://example.test:9000\"").expect("write");

        let config = ChatlineConfig::load_path(file.path()).expect("load");
        assert_eq!(config.backend.base_url, "http://example.test:9000");
        assert_eq!(config.ui.welcome_message, messages::DEFAULT_WELCOME);
    }

    #[test]
    fn quick_actions_parse_from_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[ui]\nwelcome_message = \"hi\"\n\n[[ui.quick_actions]]\nlabel = \"Docs\"\nmessage = \"Where are the docs?\""
        )
        .expect("write");

        let config = ChatlineConfig::load_path(file.path()).expect("load");
        assert_eq!(config.ui.welcome_message, "hi");
        assert_eq!(
            config.ui.quick_actions,
            vec![QuickAction {
                label: "Docs".to_string(),
                message: "Where are the docs?".to_string(),
            }]
        );
    }

    #[test]
    fn unreadable_explicit_path_is_an_error() {
        let missing = Path::new("definitely-missing-chatline.toml");
        let err = ChatlineConfig::load(Some(missing)).expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
