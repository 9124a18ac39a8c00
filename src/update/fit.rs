//! Re-fit panels after the container changed size

use crate::model::{LayoutState, WidthChanges, WIDTH_EPSILON};
use crate::panel::PanelId;

/// Order in which expanded panels absorb a container size change
const ABSORB_ORDER: [PanelId; 3] = [PanelId::Third, PanelId::Second, PanelId::First];

/// Spread the container delta over the expanded panels
///
/// Growth goes to the first expanded panel in [`ABSORB_ORDER`]. A shrink
/// takes each expanded panel down to its minimum in that order; anything
/// still missing once all of them sit at their minimum comes out of the
/// first one, which then drops below its minimum so the panels still fill
/// the container.
///
/// Returns `None` when the panels already fill the container or every panel
/// is collapsed.
pub fn plan_fit(state: &LayoutState) -> Option<WidthChanges> {
    let delta = state.container.width - state.total_width();
    if delta.abs() <= WIDTH_EPSILON {
        return None;
    }

    let absorber = ABSORB_ORDER
        .into_iter()
        .find(|id| !state.panel(*id).collapsed)?;

    let mut changes = WidthChanges::default();
    if delta > 0.0 {
        changes.set(absorber, state.width(absorber) + delta);
        return Some(changes);
    }

    let mut shortfall = -delta;
    for id in ABSORB_ORDER {
        let panel = state.panel(id);
        if panel.collapsed || shortfall <= WIDTH_EPSILON {
            continue;
        }
        let take = (panel.width - panel.min_width).clamp(0.0, shortfall);
        if take > 0.0 {
            changes.set(id, panel.width - take);
            shortfall -= take;
        }
    }

    if shortfall > WIDTH_EPSILON {
        let width = changes.get(absorber).unwrap_or(state.width(absorber));
        changes.set(absorber, width - shortfall);
    }
    Some(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContainerMetrics;

    fn state(container_width: f64, widths: [f64; 3], collapsed: [bool; 3]) -> LayoutState {
        let mut state = LayoutState::new(14.5, 42.0);
        state.container = ContainerMetrics {
            width: container_width,
            offset_x: 0.0,
        };
        for ((panel, width), collapsed) in state.panels.iter_mut().zip(widths).zip(collapsed) {
            panel.width = width;
            panel.min_width = 200.0;
            panel.collapsed = collapsed;
        }
        state
    }

    #[test]
    fn test_fitted_layout_needs_no_changes() {
        let state = state(1000.0, [200.0, 200.0, 571.0], [false; 3]);
        assert_eq!(plan_fit(&state), None);
    }

    #[test]
    fn test_third_panel_absorbs_growth() {
        let state = state(1200.0, [200.0, 200.0, 571.0], [false; 3]);
        let changes = plan_fit(&state).unwrap();
        assert_eq!(changes.get(PanelId::Third), Some(771.0));
        assert_eq!(changes.get(PanelId::First), None);
    }

    #[test]
    fn test_collapsed_third_passes_delta_to_second() {
        let state = state(900.0, [200.0, 729.0, 42.0], [false, false, true]);
        let changes = plan_fit(&state).unwrap();
        assert_eq!(changes.get(PanelId::Second), Some(629.0));
        assert_eq!(changes.get(PanelId::Third), None);
    }

    #[test]
    fn test_shrink_spreads_to_next_panel_at_minimum() {
        let state = state(700.0, [300.0, 300.0, 371.0], [false; 3]);
        let changes = plan_fit(&state).unwrap();
        assert_eq!(changes.get(PanelId::Third), Some(200.0));
        assert_eq!(changes.get(PanelId::Second), Some(200.0));
        assert_eq!(changes.get(PanelId::First), Some(271.0));
    }

    #[test]
    fn test_shrink_below_minimums_lands_on_third() {
        let state = state(600.0, [200.0, 200.0, 571.0], [false; 3]);
        let changes = plan_fit(&state).unwrap();
        assert_eq!(changes.get(PanelId::Third), Some(171.0));
        assert_eq!(changes.get(PanelId::Second), None);
        assert_eq!(changes.get(PanelId::First), None);
    }

    #[test]
    fn test_shrink_skips_collapsed_panels() {
        let state = state(542.0, [300.0, 300.0, 42.0], [false, false, true]);
        let changes = plan_fit(&state).unwrap();
        assert_eq!(changes.get(PanelId::Second), Some(200.0));
        assert_eq!(changes.get(PanelId::First), Some(271.0));
        assert_eq!(changes.get(PanelId::Third), None);
    }
}
