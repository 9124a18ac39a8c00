//! Persistent layout snapshots
//!
//! Captures panel widths, collapsed flags and remembered widths so a layout
//! can be restored across sessions. Stored as JSON in
//! `~/.config/tripane/layout.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::LayoutState;

/// Serializable picture of a settled layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Panel widths in layout order
    pub widths: [f64; 3],
    pub collapsed: [bool; 3],
    /// Widths to restore on expand, for panels that have collapsed before
    #[serde(default)]
    pub remembered: [Option<f64>; 3],
}

impl LayoutSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture a snapshot from layout state
    pub fn from_state(state: &LayoutState) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            widths: state.widths(),
            collapsed: state.collapsed_flags(),
            remembered: state.panels.map(|p| p.remembered_width),
        }
    }

    /// Reason this snapshot cannot be applied, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.collapsed.iter().all(|c| *c) {
            return Err("all three panels are collapsed".to_string());
        }
        let all_widths = self.widths.iter().chain(self.remembered.iter().flatten());
        if all_widths.clone().any(|w| !w.is_finite()) {
            return Err("widths must be finite".to_string());
        }
        if all_widths.clone().any(|w| *w < 0.0) {
            return Err("widths must not be negative".to_string());
        }
        Ok(())
    }

    /// Load the snapshot from the default location
    pub fn load() -> Option<Self> {
        let path = crate::config_paths::session_file()?;
        Self::load_from(&path)
    }

    /// Load a snapshot from a path; missing or malformed files yield `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("Ignoring layout snapshot at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save the snapshot to the default location
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::session_file() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        self.save_to(&path)
    }

    /// Save the snapshot to a path, creating parent directories
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!("Saved layout snapshot to {}", path.display());
        Ok(())
    }
}
