//! Layout controller - owns the layout state and drives the engines
//!
//! Every public operation starts by refreshing [`LayoutState`] from the
//! geometry, because container size and collapsed markers may have changed
//! between calls.

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::{GeometryProvider, Transition};
use crate::model::{
    Availability, DragSession, LayoutState, WidthChanges, DEFAULT_COLLAPSED_WIDTH,
    DEFAULT_SEPARATOR_WIDTH, WIDTH_EPSILON,
};
use crate::panel::{PanelId, SeparatorId};
use crate::session::LayoutSnapshot;
use crate::update::collapse::{plan_collapse, plan_expand, ToggleOutcome};
use crate::update::fit::plan_fit;
use crate::update::resize::{plan_resize, ResizeOutcome};

/// Three-panel layout controller over a geometry provider
#[derive(Debug)]
pub struct LayoutController<G: GeometryProvider> {
    geometry: G,
    state: LayoutState,
    drag: DragSession,
    initialized: bool,
}

impl<G: GeometryProvider> LayoutController<G> {
    /// Create a controller with the default separator and collapsed widths
    pub fn new(geometry: G) -> Self {
        Self::with_metrics(geometry, DEFAULT_SEPARATOR_WIDTH, DEFAULT_COLLAPSED_WIDTH)
    }

    /// Create a controller using the widths from a config
    pub fn with_config(geometry: G, config: &LayoutConfig) -> Self {
        Self::with_metrics(geometry, config.separator_width, config.collapsed_width)
    }

    pub fn with_metrics(geometry: G, separator_width: f64, collapsed_width: f64) -> Self {
        Self {
            geometry,
            state: LayoutState::new(separator_width, collapsed_width),
            drag: DragSession::default(),
            initialized: false,
        }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry, e.g. to simulate a container resize.
    /// Changes are picked up by the next operation's refresh.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn into_geometry(self) -> G {
        self.geometry
    }

    /// State as of the last operation
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Availability derived from the current collapsed flags
    pub fn availability(&self) -> Availability {
        Availability::from_collapsed(self.state.collapsed_flags())
    }

    fn refresh(&mut self) {
        self.state.refresh(&self.geometry);
    }

    fn ensure_initialized(&self) -> Result<(), LayoutError> {
        if self.initialized {
            Ok(())
        } else {
            Err(LayoutError::NotInitialized)
        }
    }

    fn publish_availability(&mut self) {
        self.availability().publish(&mut self.geometry);
    }

    fn apply(&mut self, changes: &WidthChanges, transition: Transition) {
        self.state.apply(changes, &mut self.geometry, transition);
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Lay the panels out from scratch: first and second at their minimum
    /// widths, the third takes the rest. Expands any collapsed panel and
    /// forgets remembered widths.
    pub fn initialize_layout(&mut self) -> Result<(), LayoutError> {
        self.refresh();

        let required = self.state.required_width();
        let available = self.state.container.width;
        if available + WIDTH_EPSILON < required {
            tracing::warn!(
                "Container too narrow for layout: need {:.1}px, have {:.1}px",
                required,
                available
            );
            return Err(LayoutError::ContainerTooNarrow {
                required,
                available,
            });
        }

        for id in PanelId::ALL {
            if self.state.panel(id).collapsed {
                self.geometry.set_collapsed(id, false);
            }
        }
        self.drag = DragSession::Idle;
        self.refresh();
        for panel in &mut self.state.panels {
            panel.remembered_width = None;
        }

        let first_min = self.state.panel(PanelId::First).min_width;
        let second_min = self.state.panel(PanelId::Second).min_width;
        let mut changes = WidthChanges::default();
        changes.set(PanelId::First, first_min);
        changes.set(PanelId::Second, second_min);
        changes.set(
            PanelId::Third,
            available - first_min - second_min - 2.0 * self.state.separator_width,
        );
        self.apply(&changes, Transition::Instant);

        self.initialized = true;
        self.publish_availability();

        tracing::debug!(widths = ?self.state.widths(), "Initialized layout");
        Ok(())
    }

    // ========================================================================
    // Drag session
    // ========================================================================

    /// Begin dragging a separator
    ///
    /// Ignored (returns `Ok`) while another drag is running.
    pub fn on_separator_pointer_down(
        &mut self,
        separator: SeparatorId,
        pointer_x: f64,
    ) -> Result<(), LayoutError> {
        self.ensure_initialized()?;

        if self.drag.is_active() {
            tracing::debug!("Ignoring pointer-down on {}: drag in progress", separator);
            return Ok(());
        }

        self.refresh();
        if !self.availability().separator_enabled(separator) {
            return Err(LayoutError::SeparatorDisabled(separator));
        }

        self.drag.begin(separator);
        tracing::debug!(x = pointer_x, "Started dragging {}", separator);
        Ok(())
    }

    /// Forward a pointer move to the resize engine
    ///
    /// Returns `None` when no drag is active.
    pub fn on_global_pointer_move(&mut self, pointer_x: f64) -> Option<ResizeOutcome> {
        let separator = self.drag.active_separator()?;

        match plan_resize(&self.state, separator, pointer_x) {
            Some(changes) => {
                self.apply(&changes, Transition::Instant);
                tracing::trace!(x = pointer_x, widths = ?self.state.widths(), "Resized");
                Some(ResizeOutcome::Applied)
            }
            None => {
                tracing::trace!(x = pointer_x, "Pointer out of range, keeping widths");
                Some(ResizeOutcome::Rejected)
            }
        }
    }

    /// End the active drag, if any. Applied widths stay as they are.
    ///
    /// Returns whether a session was ended.
    pub fn on_global_pointer_up(&mut self) -> bool {
        match self.drag.end() {
            Some(separator) => {
                tracing::debug!(widths = ?self.state.widths(), "Finished dragging {}", separator);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Collapse / expand
    // ========================================================================

    /// Collapse an expanded panel or expand a collapsed one
    pub fn toggle_panel(&mut self, panel: PanelId) -> Result<ToggleOutcome, LayoutError> {
        self.ensure_initialized()?;
        self.refresh();

        let was_collapsed = self.state.panel(panel).collapsed;
        if !was_collapsed {
            if self.state.expanded_count() <= 1 {
                return Err(LayoutError::LastExpandedPanel(panel));
            }
            let width = self.state.width(panel);
            self.state.panel_mut(panel).remembered_width = Some(width);
        }

        // the active separator may be about to become disabled
        if let Some(separator) = self.drag.end() {
            tracing::debug!("Toggle of {} ended drag of {}", panel, separator);
        }

        self.geometry.set_collapsed(panel, !was_collapsed);
        self.refresh();
        self.publish_availability();

        let (changes, outcome) = if was_collapsed {
            (plan_expand(&self.state, panel), ToggleOutcome::Expanded)
        } else {
            (plan_collapse(&self.state, panel), ToggleOutcome::Collapsed)
        };
        self.apply(&changes, Transition::Animated);

        tracing::debug!(widths = ?self.state.widths(), "{} {:?}", panel, outcome);
        Ok(outcome)
    }

    pub fn toggle_first_panel(&mut self) -> Result<ToggleOutcome, LayoutError> {
        self.toggle_panel(PanelId::First)
    }

    pub fn toggle_second_panel(&mut self) -> Result<ToggleOutcome, LayoutError> {
        self.toggle_panel(PanelId::Second)
    }

    pub fn toggle_third_panel(&mut self) -> Result<ToggleOutcome, LayoutError> {
        self.toggle_panel(PanelId::Third)
    }

    // ========================================================================
    // Container changes and snapshots
    // ========================================================================

    /// Re-fit the panels after the container changed size
    ///
    /// Returns whether any width changed.
    pub fn fit_to_container(&mut self) -> Result<bool, LayoutError> {
        self.ensure_initialized()?;
        self.refresh();

        let Some(changes) = plan_fit(&self.state) else {
            return Ok(false);
        };
        self.apply(&changes, Transition::Instant);
        tracing::debug!(
            container = self.state.container.width,
            widths = ?self.state.widths(),
            "Fitted layout to container"
        );
        Ok(true)
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_state(&self.state)
    }

    /// Apply a previously captured snapshot, then re-fit to the current
    /// container
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) -> Result<(), LayoutError> {
        self.ensure_initialized()?;
        snapshot.validate().map_err(LayoutError::SnapshotMismatch)?;

        self.refresh();
        for id in PanelId::ALL {
            let panel = self.state.panel(id);
            let collapsed = snapshot.collapsed[id.index()];
            let width = snapshot.widths[id.index()];
            if !collapsed && width + WIDTH_EPSILON < panel.min_width {
                return Err(LayoutError::SnapshotMismatch(format!(
                    "{} width {:.1} is below its minimum {:.1}",
                    id, width, panel.min_width
                )));
            }
        }

        self.drag = DragSession::Idle;
        for id in PanelId::ALL {
            self.geometry
                .set_collapsed(id, snapshot.collapsed[id.index()]);
        }
        self.refresh();

        let mut changes = WidthChanges::default();
        for id in PanelId::ALL {
            let width = if snapshot.collapsed[id.index()] {
                self.state.collapsed_width
            } else {
                snapshot.widths[id.index()]
            };
            changes.set(id, width);
            self.state.panel_mut(id).remembered_width = snapshot.remembered[id.index()];
        }
        self.apply(&changes, Transition::Instant);
        self.publish_availability();

        tracing::debug!(widths = ?self.state.widths(), "Restored layout snapshot");
        self.fit_to_container()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MemoryGeometry;

    fn controller() -> LayoutController<MemoryGeometry> {
        let mut controller =
            LayoutController::new(MemoryGeometry::new(1000.0, [200.0, 200.0, 200.0]));
        controller.initialize_layout().unwrap();
        controller
    }

    #[test]
    fn test_operations_require_initialization() {
        let mut controller =
            LayoutController::new(MemoryGeometry::new(1000.0, [200.0, 200.0, 200.0]));
        assert_eq!(
            controller.toggle_first_panel(),
            Err(LayoutError::NotInitialized)
        );
        assert_eq!(
            controller.on_separator_pointer_down(SeparatorId::First, 300.0),
            Err(LayoutError::NotInitialized)
        );
        assert_eq!(controller.fit_to_container(), Err(LayoutError::NotInitialized));
        assert!(!controller.is_initialized());
    }

    #[test]
    fn test_pointer_move_without_session_is_ignored() {
        let mut controller = controller();
        assert_eq!(controller.on_global_pointer_move(300.0), None);
        assert_eq!(controller.state().widths(), [200.0, 200.0, 571.0]);
    }

    #[test]
    fn test_toggle_writes_are_animated_and_drag_writes_instant() {
        let mut controller = controller();
        controller.geometry_mut().take_requests();

        controller.toggle_third_panel().unwrap();
        assert!(controller
            .geometry()
            .requests()
            .iter()
            .all(|r| r.transition == Transition::Animated));

        controller.toggle_third_panel().unwrap();
        controller.geometry_mut().take_requests();
        controller
            .on_separator_pointer_down(SeparatorId::Second, 464.5)
            .unwrap();
        controller.on_global_pointer_move(500.0);
        assert!(controller
            .geometry()
            .requests()
            .iter()
            .all(|r| r.transition == Transition::Instant));
    }

    #[test]
    fn test_initialize_expands_collapsed_panels() {
        let mut controller = controller();
        controller.toggle_first_panel().unwrap();
        controller.initialize_layout().unwrap();

        assert_eq!(controller.state().collapsed_count(), 0);
        assert_eq!(controller.state().panel(PanelId::First).remembered_width, None);
        assert_eq!(controller.state().widths(), [200.0, 200.0, 571.0]);
    }
}
