//! Application state and winit event handling

use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowId};

use tripane::cli::StartupConfig;
use tripane::commands::Cmd;
use tripane::controller::LayoutController;
use tripane::geometry::GeometryProvider;
use tripane::messages::LayoutMsg;
use tripane::panel::PanelId;
use tripane::session::LayoutSnapshot;
use tripane::update::update;

use super::geometry::{WindowGeometry, CONTAINER_MARGIN};
use super::hit_test::{HitTarget, PaneLayout};
use super::render::{Renderer, Scene};

pub struct App {
    controller: LayoutController<WindowGeometry>,
    window_size: (u32, u32),
    restore_session: bool,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    /// Display connection backing the renderer's surface
    _context: Option<Context<Rc<Window>>>,
    scale_factor: f64,
    cursor: Option<(f64, f64)>,
    hovered: HitTarget,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let (width, height) = startup.window_size;
        let geometry = WindowGeometry::new(&startup.layout, width as f64);
        Self {
            controller: LayoutController::with_config(geometry, &startup.layout),
            window_size: (width, height),
            restore_session: startup.restore_session,
            renderer: None,
            window: None,
            _context: None,
            scale_factor: 1.0,
            cursor: None,
            hovered: HitTarget::None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.window_size;
        let attributes = Window::default_attributes()
            .with_title("tripane")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        self.scale_factor = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(self.scale_factor);
        self.controller
            .geometry_mut()
            .set_window_width(logical.width);

        self.renderer = Some(renderer);
        self._context = Some(context);
        self.window = Some(window);
        Ok(())
    }

    fn start_layout(&mut self) {
        self.dispatch(LayoutMsg::Initialize);
        if !self.restore_session {
            return;
        }
        if let Some(snapshot) = LayoutSnapshot::load() {
            tracing::info!("Restoring saved layout");
            self.dispatch(LayoutMsg::Restore { snapshot });
        }
    }

    fn save_session(&self) {
        if !self.restore_session || !self.controller.is_initialized() {
            return;
        }
        if let Err(e) = self.controller.snapshot().save() {
            tracing::warn!("Failed to save layout: {}", e);
        }
    }

    /// Run a message through the update loop and act on the command
    fn dispatch(&mut self, msg: LayoutMsg) {
        let cmd = Cmd::from(update(&mut self.controller, msg));
        if cmd.needs_redraw() {
            self.request_redraw();
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Layout as drawn right now, following running transitions
    fn displayed_layout(&self, now: Instant) -> PaneLayout {
        let geometry = self.controller.geometry();
        let widths = PanelId::ALL.map(|id| geometry.displayed_width(id, now));
        self.pane_layout(widths)
    }

    /// Layout at the settled widths, used for hit-testing
    fn settled_layout(&self) -> PaneLayout {
        self.pane_layout(self.controller.state().widths())
    }

    fn pane_layout(&self, widths: [f64; 3]) -> PaneLayout {
        let height = self
            .window
            .as_ref()
            .map(|w| w.inner_size().to_logical::<f64>(self.scale_factor).height)
            .unwrap_or(self.window_size.1 as f64);
        PaneLayout::new(
            self.controller.geometry().container_offset_x(),
            CONTAINER_MARGIN,
            (height - 2.0 * CONTAINER_MARGIN).max(0.0),
            widths,
            self.controller.state().separator_width,
        )
    }

    fn update_hover(&mut self) {
        let hovered = match self.cursor {
            Some((x, y)) => self.settled_layout().hit_test(x, y),
            None => HitTarget::None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            self.request_redraw();
        }

        let availability = self.controller.availability();
        let icon = match hovered {
            _ if self.controller.drag().is_active() => CursorIcon::ColResize,
            HitTarget::Separator(id) if availability.separator_enabled(id) => {
                CursorIcon::ColResize
            }
            HitTarget::CollapseButton(id) if availability.button_enabled(id) => {
                CursorIcon::Pointer
            }
            _ => CursorIcon::Default,
        };
        if let Some(window) = &self.window {
            window.set_cursor(icon);
        }
    }

    fn on_left_press(&mut self) {
        let Some((x, y)) = self.cursor else {
            return;
        };
        match self.settled_layout().hit_test(x, y) {
            HitTarget::Separator(separator) => {
                self.dispatch(LayoutMsg::SeparatorPointerDown { separator, x });
            }
            HitTarget::CollapseButton(panel) => {
                if self.controller.availability().button_enabled(panel) {
                    self.dispatch(LayoutMsg::TogglePanel { panel });
                }
            }
            HitTarget::Panel(_) | HitTarget::None => {}
        }
    }

    fn on_resized(&mut self, logical_width: f64) {
        self.controller
            .geometry_mut()
            .set_window_width(logical_width);
        // a window that opened too narrow gets laid out once it fits
        let msg = if self.controller.is_initialized() {
            LayoutMsg::ContainerResized
        } else {
            LayoutMsg::Initialize
        };
        self.dispatch(msg);
        self.request_redraw();
    }

    fn render(&mut self) -> Result<()> {
        let now = Instant::now();
        let scene = Scene {
            layout: self.displayed_layout(now),
            collapsed: self.controller.state().collapsed_flags(),
            availability: self.controller.availability(),
            active_separator: self.controller.drag().active_separator(),
            hovered: self.hovered,
        };
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&scene)?;
        }

        if self.controller.geometry().is_animating(now) {
            self.request_redraw();
        } else {
            self.controller.geometry_mut().settle(now);
        }
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to open window: {:#}", e);
            event_loop.exit();
            return;
        }
        self.start_layout();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.save_session();
                event_loop.exit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(self.scale_factor);
                self.on_resized(logical.width);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                self.cursor = Some((logical.x, logical.y));
                if self.controller.drag().is_active() {
                    self.dispatch(LayoutMsg::PointerMove { x: logical.x });
                }
                self.update_hover();
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.update_hover();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.on_left_press(),
                ElementState::Released => self.dispatch(LayoutMsg::PointerUp),
            },
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
