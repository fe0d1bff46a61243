//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/ticket-table/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Table used when no `--file` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_table: Option<PathBuf>,

    /// Input that resets every ticket during a scan session
    #[serde(default = "default_reset_keyword")]
    pub reset_keyword: String,

    /// Whether the reset keyword must match case exactly
    #[serde(default)]
    pub reset_keyword_case_sensitive: bool,
}

fn default_reset_keyword() -> String {
    "reset".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_table: None,
            reset_keyword: default_reset_keyword(),
            reset_keyword_case_sensitive: false,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Whether `input` is the configured reset keyword
    pub fn is_reset_keyword(&self, input: &str) -> bool {
        if self.reset_keyword_case_sensitive {
            input == self.reset_keyword
        } else {
            input.eq_ignore_ascii_case(&self.reset_keyword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reset_keyword, "reset");
        assert!(!config.reset_keyword_case_sensitive);
        assert!(config.default_table.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("default_table: /srv/codes.txt\n").unwrap();
        assert_eq!(config.default_table, Some(PathBuf::from("/srv/codes.txt")));
        assert_eq!(config.reset_keyword, "reset");
    }

    #[test]
    fn test_reset_keyword_matching() {
        let mut config = AppConfig::default();
        assert!(config.is_reset_keyword("RESET"));
        assert!(config.is_reset_keyword("reset"));
        assert!(!config.is_reset_keyword("resets"));

        config.reset_keyword_case_sensitive = true;
        assert!(!config.is_reset_keyword("Reset"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = AppConfig {
            default_table: Some(PathBuf::from("codes.txt")),
            reset_keyword: "wipe".to_string(),
            reset_keyword_case_sensitive: true,
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "reset_keyword: [not, a, string]\n").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
