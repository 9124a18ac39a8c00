//! Tests for separator drags and the resize engine

mod common;

use common::*;
use tripane::model::DragSession;
use tripane::{LayoutError, PanelId, ResizeOutcome, SeparatorId};

// ============================================================================
// Drag session
// ============================================================================

#[test]
fn test_drag_session_lifecycle() {
    let mut controller = test_controller();
    assert_eq!(controller.drag(), DragSession::Idle);

    controller
        .on_separator_pointer_down(SeparatorId::Second, 614.5)
        .unwrap();
    assert_eq!(controller.drag().active_separator(), Some(SeparatorId::Second));

    assert_eq!(
        controller.on_global_pointer_move(614.5),
        Some(ResizeOutcome::Applied)
    );
    assert!(controller.on_global_pointer_up());
    assert!(!controller.drag().is_active());

    // a second pointer-up has nothing to end
    assert!(!controller.on_global_pointer_up());
}

#[test]
fn test_moves_without_a_session_change_nothing() {
    let mut controller = test_controller();
    assert_eq!(controller.on_global_pointer_move(700.0), None);
    assert_widths(&controller, [200.0, 200.0, 571.0]);
}

#[test]
fn test_pointer_down_during_drag_keeps_original_separator() {
    let mut controller = test_controller();
    controller
        .on_separator_pointer_down(SeparatorId::Second, 614.5)
        .unwrap();
    controller
        .on_separator_pointer_down(SeparatorId::First, 210.0)
        .unwrap();
    assert_eq!(controller.drag().active_separator(), Some(SeparatorId::Second));
}

#[test]
fn test_widths_persist_after_pointer_up() {
    let mut controller = test_controller();
    drag_to(&mut controller, SeparatorId::Second, 614.5);
    assert_widths(&controller, [200.0, 400.0, 371.0]);

    // later moves are ignored
    controller.on_global_pointer_move(500.0);
    assert_widths(&controller, [200.0, 400.0, 371.0]);
}

// ============================================================================
// Second separator
// ============================================================================

#[test]
fn test_second_separator_trades_second_against_third() {
    let mut controller = test_controller();
    controller
        .on_separator_pointer_down(SeparatorId::Second, 414.5)
        .unwrap();

    for x in [450.0, 600.0, 785.5] {
        assert_eq!(
            controller.on_global_pointer_move(x),
            Some(ResizeOutcome::Applied)
        );
        assert_width(&controller, PanelId::First, 200.0);
        assert_width(&controller, PanelId::Second, x - 214.5);
        assert_width(&controller, PanelId::Third, 1000.0 - SEPARATOR - x);
        assert_sums_to_container(&controller);
    }
}

#[test]
fn test_out_of_range_moves_leave_widths_unchanged() {
    let mut controller = test_controller();
    controller
        .on_separator_pointer_down(SeparatorId::Second, 600.0)
        .unwrap();
    controller.on_global_pointer_move(600.0);
    assert_widths(&controller, [200.0, 385.5, 385.5]);

    // one unit below the lower bound and one above the upper bound
    assert_eq!(
        controller.on_global_pointer_move(413.5),
        Some(ResizeOutcome::Rejected)
    );
    assert_widths(&controller, [200.0, 385.5, 385.5]);
    assert_eq!(
        controller.on_global_pointer_move(786.5),
        Some(ResizeOutcome::Rejected)
    );
    assert_widths(&controller, [200.0, 385.5, 385.5]);

    // the session survives rejected moves
    assert_eq!(
        controller.on_global_pointer_move(500.0),
        Some(ResizeOutcome::Applied)
    );
}

// ============================================================================
// First separator
// ============================================================================

#[test]
fn test_first_separator_is_pinned_when_everything_is_at_minimum() {
    // 200 / 200 / 571 leaves the first separator no room: both bounds are 200
    let mut controller = test_controller();
    controller
        .on_separator_pointer_down(SeparatorId::First, 200.0)
        .unwrap();
    assert_eq!(
        controller.on_global_pointer_move(199.0),
        Some(ResizeOutcome::Rejected)
    );
    assert_eq!(
        controller.on_global_pointer_move(201.0),
        Some(ResizeOutcome::Rejected)
    );
    assert_eq!(
        controller.on_global_pointer_move(200.0),
        Some(ResizeOutcome::Applied)
    );
    assert_widths(&controller, [200.0, 200.0, 571.0]);
}

#[test]
fn test_first_separator_trades_first_against_second() {
    let mut controller = test_controller();
    drag_to(&mut controller, SeparatorId::Second, 614.5);
    drag_to(&mut controller, SeparatorId::First, 300.0);

    assert_widths(&controller, [300.0, 300.0, 371.0]);
    assert_sums_to_container(&controller);
}

#[test]
fn test_drag_respects_container_offset() {
    let mut controller = test_controller_at(120.0);
    drag_to(&mut controller, SeparatorId::Second, 120.0 + 614.5);
    drag_to(&mut controller, SeparatorId::First, 120.0 + 300.0);
    assert_widths(&controller, [300.0, 300.0, 371.0]);

    controller
        .on_separator_pointer_down(SeparatorId::First, 420.0)
        .unwrap();
    assert_eq!(
        controller.on_global_pointer_move(120.0 + 199.0),
        Some(ResizeOutcome::Rejected)
    );
}

// ============================================================================
// Middle panel collapsed
// ============================================================================

#[test]
fn test_drag_with_middle_collapsed_trades_first_against_third() {
    let mut controller = test_controller();
    controller.toggle_panel(PanelId::Second).unwrap();
    assert_widths(&controller, [200.0, COLLAPSED, 729.0]);

    for separator in SeparatorId::ALL {
        drag_to(&mut controller, separator, 300.0);
        assert_widths(&controller, [300.0, COLLAPSED, 629.0]);
        assert_sums_to_container(&controller);
    }

    controller
        .on_separator_pointer_down(SeparatorId::Second, 300.0)
        .unwrap();
    // upper bound: 1000 - 29 - 42 - 200 = 729
    assert_eq!(
        controller.on_global_pointer_move(729.0),
        Some(ResizeOutcome::Applied)
    );
    assert_widths(&controller, [729.0, COLLAPSED, 200.0]);
    assert_eq!(
        controller.on_global_pointer_move(730.0),
        Some(ResizeOutcome::Rejected)
    );
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn test_disabled_separator_cannot_start_a_drag() {
    let mut controller = test_controller();
    controller.toggle_panel(PanelId::First).unwrap();

    assert_eq!(
        controller.on_separator_pointer_down(SeparatorId::First, 50.0),
        Err(LayoutError::SeparatorDisabled(SeparatorId::First))
    );
    assert!(!controller.drag().is_active());

    // the other separator still works
    assert!(controller
        .on_separator_pointer_down(SeparatorId::Second, 600.0)
        .is_ok());
}

#[test]
fn test_drag_requires_initialization() {
    let mut controller = uninitialized_controller();
    assert_eq!(
        controller.on_separator_pointer_down(SeparatorId::Second, 600.0),
        Err(LayoutError::NotInitialized)
    );
}

#[test]
fn test_toggle_ends_active_drag() {
    let mut controller = controller_300_300_371();
    controller
        .on_separator_pointer_down(SeparatorId::First, 300.0)
        .unwrap();

    controller.toggle_panel(PanelId::First).unwrap();
    assert!(!controller.drag().is_active());
    assert_widths(&controller, [42.0, 558.0, 371.0]);

    // the collapsed panel keeps its collapsed width
    assert_eq!(controller.on_global_pointer_move(350.0), None);
    assert_widths(&controller, [42.0, 558.0, 371.0]);
    assert_width_bounds(&controller);
    assert!(!controller.on_global_pointer_up());
}
