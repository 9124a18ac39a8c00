//! Runtime module - winit/platform integration
//!
//! This module contains the platform code for the demo window:
//! - `app` - ApplicationHandler and window management
//! - `geometry` - window-backed geometry with animated transitions
//! - `frame` - pixel buffer drawing primitives
//! - `hit_test` - pane rectangles and pointer hit-testing
//! - `render` - softbuffer renderer

pub mod app;
pub mod frame;
pub mod geometry;
pub mod render;

pub use app::App;
