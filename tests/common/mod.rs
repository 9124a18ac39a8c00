//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tripane::controller::LayoutController;
use tripane::geometry::{GeometryProvider, MemoryGeometry};
use tripane::model::WIDTH_EPSILON;
use tripane::panel::PanelId;

pub const SEPARATOR: f64 = 14.5;
pub const COLLAPSED: f64 = 42.0;

/// 1000px container at page offset 0, every minimum 200px, not initialized
pub fn uninitialized_controller() -> LayoutController<MemoryGeometry> {
    LayoutController::new(MemoryGeometry::new(1000.0, [200.0, 200.0, 200.0]))
}

/// Initialized controller: widths 200 / 200 / 571
pub fn test_controller() -> LayoutController<MemoryGeometry> {
    let mut controller = uninitialized_controller();
    controller
        .initialize_layout()
        .expect("1000px fits three 200px panels");
    controller
}

/// Initialized controller whose container starts at `offset_x` on the page
pub fn test_controller_at(offset_x: f64) -> LayoutController<MemoryGeometry> {
    let geometry = MemoryGeometry::new(1000.0, [200.0, 200.0, 200.0]).with_offset(offset_x);
    let mut controller = LayoutController::new(geometry);
    controller.initialize_layout().expect("layout fits");
    controller
}

/// Run a full drag of `separator` ending at `x`
pub fn drag_to(
    controller: &mut LayoutController<MemoryGeometry>,
    separator: tripane::SeparatorId,
    x: f64,
) {
    controller
        .on_separator_pointer_down(separator, x)
        .expect("separator enabled");
    controller.on_global_pointer_move(x);
    controller.on_global_pointer_up();
}

/// Drive the controller to widths 300 / 300 / 371
pub fn controller_300_300_371() -> LayoutController<MemoryGeometry> {
    let mut controller = test_controller();
    drag_to(&mut controller, tripane::SeparatorId::Second, 614.5);
    drag_to(&mut controller, tripane::SeparatorId::First, 300.0);
    assert_widths(&controller, [300.0, 300.0, 371.0]);
    controller
}

pub fn assert_width(controller: &LayoutController<MemoryGeometry>, panel: PanelId, expected: f64) {
    let actual = controller.geometry().panel_width(panel);
    assert!(
        (actual - expected).abs() <= WIDTH_EPSILON,
        "{} width: expected {}, got {}",
        panel,
        expected,
        actual
    );
}

pub fn assert_widths(controller: &LayoutController<MemoryGeometry>, expected: [f64; 3]) {
    for panel in PanelId::ALL {
        assert_width(controller, panel, expected[panel.index()]);
    }
}

/// Widths plus both separators add up to the container width
pub fn assert_sums_to_container(controller: &LayoutController<MemoryGeometry>) {
    let geometry = controller.geometry();
    let total: f64 = geometry.widths().iter().sum::<f64>() + 2.0 * SEPARATOR;
    assert!(
        (total - geometry.container_width()).abs() <= WIDTH_EPSILON,
        "widths {:?} + separators = {}, container is {}",
        geometry.widths(),
        total,
        geometry.container_width()
    );
}

/// Expanded panels sit at or above their minimum, collapsed ones at the
/// collapsed width
pub fn assert_width_bounds(controller: &LayoutController<MemoryGeometry>) {
    let geometry = controller.geometry();
    for panel in PanelId::ALL {
        let width = geometry.panel_width(panel);
        if geometry.is_collapsed(panel) {
            assert!(
                (width - COLLAPSED).abs() <= WIDTH_EPSILON,
                "collapsed {} is {} wide",
                panel,
                width
            );
        } else {
            assert!(
                width + WIDTH_EPSILON >= geometry.panel_min_width(panel),
                "{} is {} wide, below its minimum",
                panel,
                width
            );
        }
    }
}
