//! Resize engine - pointer position to widths during a drag
//!
//! Each move recomputes from the absolute pointer position, the container
//! metrics and the width of whichever panel is not involved. No state is
//! carried between moves.
//!
//! Pointers outside the valid range are rejected wholesale rather than
//! clamped, so the separator sticks at the boundary.

use crate::model::LayoutState;
use crate::model::WidthChanges;
use crate::panel::{PanelId, SeparatorId};

/// Result of a single pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// New widths were applied
    Applied,
    /// The pointer was out of range; widths are unchanged
    Rejected,
}

/// Compute new widths for the two panels the drag affects
///
/// Returns `None` when `pointer_x` falls outside the range that keeps both
/// panels at or above their minimum widths.
pub fn plan_resize(
    state: &LayoutState,
    separator: SeparatorId,
    pointer_x: f64,
) -> Option<WidthChanges> {
    let off = state.container.offset_x;
    let cw = state.container.width;
    let s = state.separator_width;

    let first = state.panel(PanelId::First);
    let second = state.panel(PanelId::Second);
    let third = state.panel(PanelId::Third);

    let mut changes = WidthChanges::default();

    if second.collapsed {
        // The middle panel is fixed, so either separator trades width
        // between the first and third panels.
        let lower = off + first.min_width;
        let upper = off + cw - 2.0 * s - second.width - third.min_width;
        if !in_range(pointer_x, lower, upper) {
            return None;
        }
        changes.set(PanelId::First, pointer_x - state.offset_left(PanelId::First));
        changes.set(PanelId::Third, off + cw - 2.0 * s - second.width - pointer_x);
        return Some(changes);
    }

    match separator {
        SeparatorId::First => {
            let lower = off + first.min_width;
            let upper = off + cw - third.width - 2.0 * s - second.min_width;
            if !in_range(pointer_x, lower, upper) {
                return None;
            }
            changes.set(PanelId::First, pointer_x - state.offset_left(PanelId::First));
            changes.set(PanelId::Second, off + cw - third.width - 2.0 * s - pointer_x);
        }
        SeparatorId::Second => {
            let lower = off + first.width + s + second.min_width;
            let upper = off + cw - s - third.min_width;
            if !in_range(pointer_x, lower, upper) {
                return None;
            }
            changes.set(
                PanelId::Second,
                pointer_x - state.offset_left(PanelId::Second),
            );
            changes.set(PanelId::Third, off + cw - s - pointer_x);
        }
    }

    Some(changes)
}

fn in_range(x: f64, lower: f64, upper: f64) -> bool {
    x >= lower && x <= upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContainerMetrics;

    /// 1000px container at offset 50, minimums 200/200/200
    fn state(widths: [f64; 3], middle_collapsed: bool) -> LayoutState {
        let mut state = LayoutState::new(14.5, 42.0);
        state.container = ContainerMetrics {
            width: 1000.0,
            offset_x: 50.0,
        };
        for (panel, width) in state.panels.iter_mut().zip(widths) {
            panel.width = width;
            panel.min_width = 200.0;
        }
        state.panel_mut(PanelId::Second).collapsed = middle_collapsed;
        state
    }

    #[test]
    fn test_first_separator_trades_first_and_second() {
        let state = state([200.0, 400.0, 371.0], false);
        let changes = plan_resize(&state, SeparatorId::First, 50.0 + 300.0).unwrap();
        assert_eq!(changes.get(PanelId::First), Some(300.0));
        assert_eq!(changes.get(PanelId::Second), Some(300.0));
        assert_eq!(changes.get(PanelId::Third), None);
    }

    #[test]
    fn test_second_separator_trades_second_and_third() {
        let state = state([200.0, 200.0, 571.0], false);
        // second panel's left edge sits at 50 + 200 + 14.5
        let changes = plan_resize(&state, SeparatorId::Second, 664.5).unwrap();
        assert_eq!(changes.get(PanelId::First), None);
        assert_eq!(changes.get(PanelId::Second), Some(400.0));
        assert_eq!(changes.get(PanelId::Third), Some(371.0));
    }

    #[test]
    fn test_middle_collapsed_trades_first_and_third_from_either_separator() {
        let state = state([300.0, 42.0, 629.0], true);
        for separator in SeparatorId::ALL {
            let changes = plan_resize(&state, separator, 50.0 + 400.0).unwrap();
            assert_eq!(changes.get(PanelId::First), Some(400.0));
            assert_eq!(changes.get(PanelId::Second), None);
            assert_eq!(changes.get(PanelId::Third), Some(529.0));
        }
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        let state = state([200.0, 200.0, 571.0], false);
        assert!(plan_resize(&state, SeparatorId::First, 50.0 + 199.0).is_none());
        assert!(plan_resize(&state, SeparatorId::Second, 663.5 + 1000.0).is_none());
        // would push the second panel under its minimum
        assert!(plan_resize(&state, SeparatorId::First, 50.0 + 201.0).is_none());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let state = state([200.0, 400.0, 371.0], false);
        let upper = 50.0 + 1000.0 - 371.0 - 29.0 - 200.0;
        let changes = plan_resize(&state, SeparatorId::First, upper).unwrap();
        assert_eq!(changes.get(PanelId::Second), Some(200.0));
        assert!(plan_resize(&state, SeparatorId::First, upper + 0.5).is_none());
    }
}
