//! Message types for the Elm-style architecture
//!
//! All layout state changes flow through these messages. They are also the
//! step format of replay scripts, hence the serde derives.

use serde::{Deserialize, Serialize};

use crate::panel::{PanelId, SeparatorId};
use crate::session::LayoutSnapshot;

/// Layout messages (pointer input, toggles, container changes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LayoutMsg {
    /// Lay the panels out from scratch (panel view became visible)
    Initialize,
    /// Pointer pressed on a separator
    SeparatorPointerDown { separator: SeparatorId, x: f64 },
    /// Pointer moved anywhere on the page
    PointerMove { x: f64 },
    /// Pointer released anywhere on the page
    PointerUp,
    /// Collapse-toggle button pressed
    TogglePanel { panel: PanelId },
    /// The container changed size (e.g. window resize)
    ContainerResized,
    /// Apply a saved layout
    Restore { snapshot: LayoutSnapshot },
}

impl LayoutMsg {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMsg::Initialize => "initialize",
            LayoutMsg::SeparatorPointerDown { .. } => "separator_pointer_down",
            LayoutMsg::PointerMove { .. } => "pointer_move",
            LayoutMsg::PointerUp => "pointer_up",
            LayoutMsg::TogglePanel { .. } => "toggle_panel",
            LayoutMsg::ContainerResized => "container_resized",
            LayoutMsg::Restore { .. } => "restore",
        }
    }
}
