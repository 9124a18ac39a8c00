//! tripane - three-panel split layout controller
//!
//! This crate provides the layout core for a horizontally split, three-panel
//! view: draggable separators, collapsible panels and the availability
//! rules that tie them together, implementing the Elm Architecture pattern.
//! Rendering and pointer binding sit behind [`geometry::GeometryProvider`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panel;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use controller::LayoutController;
pub use error::LayoutError;
pub use geometry::{GeometryProvider, MemoryGeometry, Transition};
pub use messages::LayoutMsg;
pub use panel::{PanelId, SeparatorId};
pub use session::LayoutSnapshot;
pub use update::collapse::ToggleOutcome;
pub use update::resize::ResizeOutcome;
