//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Repaint once with the new widths
    Redraw,
    /// Widths were handed off as animated transitions; keep repainting until
    /// they settle
    Animate,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw | Cmd::Animate)
    }

    /// Check if this command starts a transition
    pub fn is_animating(&self) -> bool {
        matches!(self, Cmd::Animate)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
