//! Layout model
//!
//! Plain data the engines read and write: panel widths and flags
//! ([`LayoutState`]), the drag session state machine ([`DragSession`]) and
//! the separator/button availability policy ([`Availability`]).

pub mod availability;
pub mod drag;
pub mod state;

pub use availability::Availability;
pub use drag::DragSession;
pub use state::{ContainerMetrics, LayoutState, PanelState, WidthChanges};

/// Default visual width of a separator in pixels
pub const DEFAULT_SEPARATOR_WIDTH: f64 = 14.5;

/// Default width of a collapsed panel in pixels
pub const DEFAULT_COLLAPSED_WIDTH: f64 = 42.0;

/// Tolerance used when comparing summed widths against the container
pub const WIDTH_EPSILON: f64 = 1e-6;
