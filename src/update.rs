//! Update function - dispatches layout messages to the controller
//!
//! Rejected operations (guards in the controller) are logged and produce no
//! command; the host never has to handle layout errors itself.

pub mod collapse;
pub mod fit;
pub mod resize;

use crate::commands::Cmd;
use crate::controller::LayoutController;
use crate::geometry::GeometryProvider;
use crate::messages::LayoutMsg;
use crate::tracing::WidthsSnapshot;

use resize::ResizeOutcome;

/// Main update function - dispatches to the matching controller operation
pub fn update<G: GeometryProvider>(
    controller: &mut LayoutController<G>,
    msg: LayoutMsg,
) -> Option<Cmd> {
    let before = WidthsSnapshot::from_state(controller.state());
    let msg_name = msg.name();

    let result = match msg {
        LayoutMsg::Initialize => match controller.initialize_layout() {
            Ok(()) => Some(Cmd::Redraw),
            Err(e) => {
                tracing::warn!("Layout initialization failed: {}", e);
                None
            }
        },

        LayoutMsg::SeparatorPointerDown { separator, x } => {
            match controller.on_separator_pointer_down(separator, x) {
                // Repaint so the host can highlight the active separator
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::debug!("Drag not started: {}", e);
                    None
                }
            }
        }

        LayoutMsg::PointerMove { x } => match controller.on_global_pointer_move(x) {
            Some(ResizeOutcome::Applied) => Some(Cmd::Redraw),
            Some(ResizeOutcome::Rejected) | None => None,
        },

        LayoutMsg::PointerUp => controller.on_global_pointer_up().then_some(Cmd::Redraw),

        LayoutMsg::TogglePanel { panel } => match controller.toggle_panel(panel) {
            Ok(_) => Some(Cmd::Animate),
            Err(e) => {
                tracing::warn!("Toggle rejected: {}", e);
                None
            }
        },

        LayoutMsg::ContainerResized => match controller.fit_to_container() {
            Ok(true) => Some(Cmd::Redraw),
            Ok(false) => None,
            Err(e) => {
                tracing::debug!("Container resize ignored: {}", e);
                None
            }
        },

        LayoutMsg::Restore { snapshot } => match controller.restore(&snapshot) {
            Ok(()) => Some(Cmd::Redraw),
            Err(e) => {
                tracing::warn!("Layout restore rejected: {}", e);
                None
            }
        },
    };

    let after = WidthsSnapshot::from_state(controller.state());
    if let Some(diff) = before.diff(&after) {
        tracing::debug!(target: "layout", "{}: {}", msg_name, diff);
    }

    result
}
