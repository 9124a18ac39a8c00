//! Layout configuration persistence
//!
//! Stores user preferences in `~/.config/tripane/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_COLLAPSED_WIDTH, DEFAULT_SEPARATOR_WIDTH};

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Visual width of each separator in pixels
    #[serde(default = "default_separator_width")]
    pub separator_width: f64,

    /// Width of a collapsed panel in pixels
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: f64,

    /// Minimum panel widths, left to right. Read by geometry providers that
    /// don't carry their own constraints (in-memory geometry, the demo window).
    #[serde(default = "default_min_widths")]
    pub min_widths: [f64; 3],

    /// Duration of collapse/expand transitions in the demo window
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Restore the last layout snapshot on startup
    #[serde(default = "default_restore_session")]
    pub restore_session: bool,
}

fn default_separator_width() -> f64 {
    DEFAULT_SEPARATOR_WIDTH
}

fn default_collapsed_width() -> f64 {
    DEFAULT_COLLAPSED_WIDTH
}

fn default_min_widths() -> [f64; 3] {
    [200.0, 200.0, 200.0]
}

fn default_animation_ms() -> u64 {
    400
}

fn default_restore_session() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            separator_width: default_separator_width(),
            collapsed_width: default_collapsed_width(),
            min_widths: default_min_widths(),
            animation_ms: default_animation_ms(),
            restore_session: default_restore_session(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if it is missing
    /// or unreadable
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.separator_width, 14.5);
        assert_eq!(config.collapsed_width, 42.0);
        assert_eq!(config.min_widths, [200.0, 200.0, 200.0]);
        assert!(config.restore_session);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: LayoutConfig = serde_yaml::from_str("collapsed_width: 30\n").unwrap();
        assert_eq!(config.collapsed_width, 30.0);
        assert_eq!(config.separator_width, 14.5);
        assert_eq!(config.animation_ms, 400);
    }
}
