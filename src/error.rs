//! Errors surfaced by layout operations
//!
//! Geometry arithmetic itself never fails. These cover the guards around it:
//! calling into an uninitialized layout, degenerate containers, and requests
//! the availability policy would have refused.

use crate::panel::{PanelId, SeparatorId};

/// Errors that can occur when driving a [`LayoutController`](crate::LayoutController)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An interaction arrived before `initialize_layout`
    NotInitialized,
    /// The container cannot hold every panel at its minimum width
    ContainerTooNarrow { required: f64, available: f64 },
    /// Pointer-down on a separator the availability policy disabled
    SeparatorDisabled(SeparatorId),
    /// Collapsing this panel would leave no expanded panel
    LastExpandedPanel(PanelId),
    /// A layout snapshot that cannot be applied
    SnapshotMismatch(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "layout has not been initialized"),
            Self::ContainerTooNarrow {
                required,
                available,
            } => write!(
                f,
                "container too narrow: need {:.1}px, have {:.1}px",
                required, available
            ),
            Self::SeparatorDisabled(separator) => write!(f, "{} is disabled", separator),
            Self::LastExpandedPanel(panel) => {
                write!(f, "cannot collapse {}: it is the last expanded panel", panel)
            }
            Self::SnapshotMismatch(reason) => write!(f, "invalid layout snapshot: {}", reason),
        }
    }
}

impl std::error::Error for LayoutError {}
