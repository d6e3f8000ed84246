//! Session state shared by the CLI frontend.

use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "ringside";

/// Persisted preferences, stored as TOML via confy in the platform
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub replay_directory: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            replay_directory: dir.to_string_lossy().into_owned(),
        }
    }
}

/// Everything a session carries: the accumulated roster plus config.
#[derive(Debug, Default)]
pub struct AppState {
    pub roster: Roster,
    pub config: AppConfig,
}

impl AppState {
    pub fn new() -> Self {
        let config = match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "failed to load config, using defaults");
                AppConfig::default()
            }
        };
        Self {
            roster: Roster::new(),
            config,
        }
    }

    /// Interpret a replay reference relative to the configured directory.
    /// Absolute paths and URLs pass through untouched.
    pub fn resolve_replay_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() || reference.contains("://") {
            return path.to_path_buf();
        }
        Path::new(&self.config.replay_directory).join(path)
    }

    pub fn save_config(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_round_trip() {
        let config = AppConfig {
            replay_directory: "/tmp/replays".to_string(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.replay_directory, config.replay_directory);
    }

    #[test]
    fn test_relative_reference_joins_configured_directory() {
        let state = AppState {
            roster: Roster::new(),
            config: AppConfig {
                replay_directory: "/data/replays".to_string(),
            },
        };
        assert_eq!(
            state.resolve_replay_path("battle-gen9ou-42.log"),
            PathBuf::from("/data/replays/battle-gen9ou-42.log")
        );
        assert_eq!(
            state.resolve_replay_path("/abs/battle.log"),
            PathBuf::from("/abs/battle.log")
        );
    }
}
