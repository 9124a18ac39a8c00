//! Drag session state machine (Idle -> Active -> Idle)

use crate::panel::SeparatorId;

/// A single pointer drag on one of the separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Active { separator: SeparatorId },
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Active { .. })
    }

    pub fn active_separator(&self) -> Option<SeparatorId> {
        match self {
            DragSession::Active { separator } => Some(*separator),
            DragSession::Idle => None,
        }
    }

    /// Start a session. Returns false (and keeps the running session) if one
    /// is already active.
    pub fn begin(&mut self, separator: SeparatorId) -> bool {
        if self.is_active() {
            return false;
        }
        *self = DragSession::Active { separator };
        true
    }

    /// End the session, returning the separator that was being dragged
    pub fn end(&mut self) -> Option<SeparatorId> {
        let separator = self.active_separator();
        *self = DragSession::Idle;
        separator
    }
}
