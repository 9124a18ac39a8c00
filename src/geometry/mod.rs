//! Geometry access
//!
//! The layout core never touches a rendering surface directly. Everything it
//! reads (container metrics, panel widths and constraints, collapsed markers)
//! and everything it writes (widths, availability markers) goes through
//! [`GeometryProvider`].

mod memory;

pub use memory::{MemoryGeometry, MemoryPanel, WidthRequest};

use crate::panel::{PanelId, SeparatorId};

/// How a width change should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the new width (drag moves, initialization)
    Instant,
    /// Play a transition towards the new width (collapse/expand)
    Animated,
}

/// Capability interface over the surface that owns the panels
///
/// `panel_width` must report the width a panel is settling to: once
/// `apply_width` has been called, later reads return that target even while
/// an animation towards it is still playing.
pub trait GeometryProvider {
    /// Width of the enclosing container in pixels
    fn container_width(&self) -> f64;

    /// Page x-coordinate of the container's left edge
    fn container_offset_x(&self) -> f64;

    fn panel_width(&self, panel: PanelId) -> f64;

    /// Configured minimum width, read-only to the layout core
    fn panel_min_width(&self, panel: PanelId) -> f64;

    fn is_collapsed(&self, panel: PanelId) -> bool;

    fn set_collapsed(&mut self, panel: PanelId, collapsed: bool);

    /// Apply a width; animated requests are fire-and-forget
    fn apply_width(&mut self, panel: PanelId, width: f64, transition: Transition);

    fn is_separator_disabled(&self, separator: SeparatorId) -> bool;

    fn set_separator_disabled(&mut self, separator: SeparatorId, disabled: bool);

    fn is_button_disabled(&self, panel: PanelId) -> bool;

    fn set_button_disabled(&mut self, panel: PanelId, disabled: bool);
}
