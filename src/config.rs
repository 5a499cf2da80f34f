/// Application configuration
///
/// The config is a small JSON file in the user's config directory:
/// - Linux: ~/.config/image-editor/config.json
/// - macOS: ~/Library/Application Support/image-editor/config.json
/// - Windows: %APPDATA%\image-editor\config.json
///
/// A missing file simply means defaults; a broken file is reported and
/// ignored rather than aborting startup.
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External command used to capture a photo from the camera. The command
    /// is invoked with the target file path appended as its final argument.
    pub capture_command: Option<String>,
}

/// Why the config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Load the configuration, falling back to defaults on any problem.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(error) => {
                tracing::warn!(%error, "ignoring unusable config file");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Where the config file lives, when a config directory exists at all.
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("image-editor");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.capture_command, None);
    }

    #[test]
    fn test_round_trip_preserves_capture_command() {
        let config = Config {
            capture_command: Some("fswebcam -r 1280x720".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, config);
    }
}
