//! Deterministic in-memory geometry
//!
//! Holds every value a rendered page would report, applies widths
//! immediately, and keeps a log of the width requests it received so callers
//! can inspect which transitions were asked for.

use super::{GeometryProvider, Transition};
use crate::config::LayoutConfig;
use crate::panel::{PanelId, SeparatorId};

/// One panel as seen by [`MemoryGeometry`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryPanel {
    pub width: f64,
    pub min_width: f64,
    pub collapsed: bool,
    pub button_disabled: bool,
}

impl MemoryPanel {
    fn new(min_width: f64) -> Self {
        Self {
            width: 0.0,
            min_width,
            collapsed: false,
            button_disabled: false,
        }
    }
}

/// A width write recorded by [`MemoryGeometry`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRequest {
    pub panel: PanelId,
    pub width: f64,
    pub transition: Transition,
}

/// In-memory geometry provider for tests, headless replay and as the
/// settled state behind the demo window
#[derive(Debug, Clone)]
pub struct MemoryGeometry {
    container_width: f64,
    container_offset_x: f64,
    panels: [MemoryPanel; 3],
    separators_disabled: [bool; 2],
    requests: Vec<WidthRequest>,
    record_requests: bool,
}

impl MemoryGeometry {
    /// Create a container of the given width at page offset 0
    pub fn new(container_width: f64, min_widths: [f64; 3]) -> Self {
        Self {
            container_width,
            container_offset_x: 0.0,
            panels: min_widths.map(MemoryPanel::new),
            separators_disabled: [false; 2],
            requests: Vec::new(),
            record_requests: true,
        }
    }

    /// Create a container using the minimum widths from a config
    pub fn from_config(config: &LayoutConfig, container_width: f64) -> Self {
        Self::new(container_width, config.min_widths)
    }

    /// Builder-style page offset of the container's left edge
    pub fn with_offset(mut self, offset_x: f64) -> Self {
        self.container_offset_x = offset_x;
        self
    }

    /// Builder-style switch to stop logging width requests (long-running
    /// hosts that never inspect them)
    pub fn without_request_log(mut self) -> Self {
        self.record_requests = false;
        self
    }

    /// Simulate a container resize (e.g. the window changed size)
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    pub fn set_container_offset_x(&mut self, offset_x: f64) {
        self.container_offset_x = offset_x;
    }

    pub fn panel(&self, panel: PanelId) -> &MemoryPanel {
        &self.panels[panel.index()]
    }

    /// Current widths in layout order
    pub fn widths(&self) -> [f64; 3] {
        self.panels.map(|p| p.width)
    }

    /// Width requests received so far, oldest first
    pub fn requests(&self) -> &[WidthRequest] {
        &self.requests
    }

    /// Drain the request log
    pub fn take_requests(&mut self) -> Vec<WidthRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl GeometryProvider for MemoryGeometry {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn container_offset_x(&self) -> f64 {
        self.container_offset_x
    }

    fn panel_width(&self, panel: PanelId) -> f64 {
        self.panels[panel.index()].width
    }

    fn panel_min_width(&self, panel: PanelId) -> f64 {
        self.panels[panel.index()].min_width
    }

    fn is_collapsed(&self, panel: PanelId) -> bool {
        self.panels[panel.index()].collapsed
    }

    fn set_collapsed(&mut self, panel: PanelId, collapsed: bool) {
        self.panels[panel.index()].collapsed = collapsed;
    }

    fn apply_width(&mut self, panel: PanelId, width: f64, transition: Transition) {
        self.panels[panel.index()].width = width;
        if self.record_requests {
            self.requests.push(WidthRequest {
                panel,
                width,
                transition,
            });
        }
    }

    fn is_separator_disabled(&self, separator: SeparatorId) -> bool {
        self.separators_disabled[separator.index()]
    }

    fn set_separator_disabled(&mut self, separator: SeparatorId, disabled: bool) {
        self.separators_disabled[separator.index()] = disabled;
    }

    fn is_button_disabled(&self, panel: PanelId) -> bool {
        self.panels[panel.index()].button_disabled
    }

    fn set_button_disabled(&mut self, panel: PanelId, disabled: bool) {
        self.panels[panel.index()].button_disabled = disabled;
    }
}
