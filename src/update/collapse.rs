//! Collapse/expand engine
//!
//! Computes target widths after a panel's collapsed flag has been flipped.
//! The state passed in must already reflect the new flag; the toggled
//! panel's own width is not trusted (it may still report its old width).
//!
//! Every result keeps `first + second + third + 2 * separator` equal to the
//! container width.

use crate::model::{LayoutState, WidthChanges};
use crate::panel::PanelId;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Collapsed,
    Expanded,
}

/// Widths after `panel` collapsed
///
/// The freed space goes to the panel's give-way neighbor, or to the far
/// panel when the give-way neighbor is itself collapsed.
pub fn plan_collapse(state: &LayoutState, panel: PanelId) -> WidthChanges {
    let cw = state.container.width;
    let s = state.separator_width;
    let c = state.collapsed_width;

    let (absorber, other) = if state.panel(panel.give_way()).collapsed {
        (panel.far(), panel.give_way())
    } else {
        (panel.give_way(), panel.far())
    };

    let mut changes = WidthChanges::default();
    changes.set(panel, c);
    changes.set(absorber, cw - 2.0 * s - c - state.effective_width(other));
    changes
}

/// Widths after `panel` expanded back to its remembered width
///
/// The give-way neighbor shrinks first. If it lacks the slack above its
/// minimum, it drops to that minimum and the far panel covers the rest.
/// The restored width is capped so neither sibling is pushed under its
/// floor (minimum width, or the collapsed width for collapsed siblings).
pub fn plan_expand(state: &LayoutState, panel: PanelId) -> WidthChanges {
    let cw = state.container.width;
    let s = state.separator_width;
    let c = state.collapsed_width;

    let give_way_id = panel.give_way();
    let far_id = panel.far();
    let give_way = state.panel(give_way_id);
    let far = state.panel(far_id);

    let this = state.panel(panel);
    let remembered = this.remembered_width.unwrap_or(this.min_width);
    let ceiling = cw - 2.0 * s - state.floor_width(give_way_id) - state.floor_width(far_id);
    let restored = remembered.min(ceiling);

    let needed = restored - c - (give_way.width - give_way.min_width);

    let mut changes = WidthChanges::default();
    changes.set(panel, restored);

    if give_way.collapsed {
        changes.set(far_id, cw - restored - c - 2.0 * s);
    } else if needed > 0.0 {
        if far.collapsed {
            changes.set(give_way_id, cw - restored - c - 2.0 * s);
        } else {
            changes.set(give_way_id, give_way.min_width);
            changes.set(far_id, cw - restored - give_way.min_width - 2.0 * s);
        }
    } else {
        changes.set(
            give_way_id,
            cw - restored - state.effective_width(far_id) - 2.0 * s,
        );
    }

    changes
}
