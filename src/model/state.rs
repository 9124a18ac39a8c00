//! Layout state - container metrics and per-panel widths/flags

use crate::geometry::{GeometryProvider, Transition};
use crate::panel::PanelId;

use super::WIDTH_EPSILON;

/// Container metrics, read fresh at the start of every operation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerMetrics {
    /// Width in pixels
    pub width: f64,
    /// Page x-coordinate of the left edge
    pub offset_x: f64,
}

/// Per-panel values the engines work with
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelState {
    pub width: f64,
    pub min_width: f64,
    pub collapsed: bool,
    /// Width held just before the last collapse; owned by the controller,
    /// never refreshed from geometry
    pub remembered_width: Option<f64>,
}

/// Everything the resize and collapse engines need across calls
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub container: ContainerMetrics,
    pub panels: [PanelState; 3],
    pub separator_width: f64,
    pub collapsed_width: f64,
}

impl LayoutState {
    pub fn new(separator_width: f64, collapsed_width: f64) -> Self {
        Self {
            container: ContainerMetrics::default(),
            panels: [PanelState::default(); 3],
            separator_width,
            collapsed_width,
        }
    }

    /// Re-read container metrics and panel widths/minimums/flags
    ///
    /// Remembered widths are left untouched.
    pub fn refresh<G: GeometryProvider + ?Sized>(&mut self, geometry: &G) {
        self.container = ContainerMetrics {
            width: geometry.container_width(),
            offset_x: geometry.container_offset_x(),
        };
        for id in PanelId::ALL {
            let panel = &mut self.panels[id.index()];
            panel.width = geometry.panel_width(id);
            panel.min_width = geometry.panel_min_width(id);
            panel.collapsed = geometry.is_collapsed(id);
        }
    }

    pub fn panel(&self, id: PanelId) -> &PanelState {
        &self.panels[id.index()]
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut PanelState {
        &mut self.panels[id.index()]
    }

    pub fn width(&self, id: PanelId) -> f64 {
        self.panel(id).width
    }

    /// Width a panel occupies once settled: the collapsed width for collapsed
    /// panels, the stored width otherwise
    pub fn effective_width(&self, id: PanelId) -> f64 {
        let panel = self.panel(id);
        if panel.collapsed {
            self.collapsed_width
        } else {
            panel.width
        }
    }

    /// Smallest width a panel may be squeezed to
    pub fn floor_width(&self, id: PanelId) -> f64 {
        let panel = self.panel(id);
        if panel.collapsed {
            self.collapsed_width
        } else {
            panel.min_width
        }
    }

    /// Page x-coordinate of a panel's left edge, derived from the widths of
    /// the panels before it
    pub fn offset_left(&self, id: PanelId) -> f64 {
        PanelId::ALL[..id.index()]
            .iter()
            .fold(self.container.offset_x, |x, p| {
                x + self.width(*p) + self.separator_width
            })
    }

    pub fn widths(&self) -> [f64; 3] {
        self.panels.map(|p| p.width)
    }

    pub fn collapsed_flags(&self) -> [bool; 3] {
        self.panels.map(|p| p.collapsed)
    }

    pub fn collapsed_count(&self) -> usize {
        self.panels.iter().filter(|p| p.collapsed).count()
    }

    pub fn expanded_count(&self) -> usize {
        self.panels.len() - self.collapsed_count()
    }

    /// Sum of panel widths plus both separators
    pub fn total_width(&self) -> f64 {
        self.panels.iter().map(|p| p.width).sum::<f64>() + 2.0 * self.separator_width
    }

    /// Narrowest container that fits every panel at its minimum
    pub fn required_width(&self) -> f64 {
        self.panels.iter().map(|p| p.min_width).sum::<f64>() + 2.0 * self.separator_width
    }

    /// Whether the panels and separators exactly fill the container
    pub fn fills_container(&self) -> bool {
        (self.total_width() - self.container.width).abs() <= WIDTH_EPSILON
    }

    /// Apply computed widths to both the state and the geometry
    pub fn apply<G: GeometryProvider + ?Sized>(
        &mut self,
        changes: &WidthChanges,
        geometry: &mut G,
        transition: Transition,
    ) {
        for (id, width) in changes.iter() {
            self.panel_mut(id).width = width;
            geometry.apply_width(id, width, transition);
        }
    }
}

/// Target widths computed by an engine, at most one per panel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidthChanges([Option<f64>; 3]);

impl WidthChanges {
    pub fn set(&mut self, id: PanelId, width: f64) {
        self.0[id.index()] = Some(width);
    }

    pub fn get(&self, id: PanelId) -> Option<f64> {
        self.0[id.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Changed panels in layout order
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, f64)> + '_ {
        PanelId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|w| (id, w)))
    }
}
