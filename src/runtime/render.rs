//! Software renderer for the demo window

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::{Context, Surface};
use winit::window::Window;

use tripane::model::Availability;
use tripane::panel::{PanelId, SeparatorId};

use super::frame::{Frame, Rect};
use super::hit_test::{HitTarget, PaneLayout};

const BACKGROUND: u32 = 0x1E1F22;
const PANEL_COLORS: [u32; 3] = [0x2B2D30, 0x27292C, 0x2B2D30];
const PANEL_BORDER: u32 = 0x393B40;
const SEPARATOR: u32 = 0x3C3F44;
const SEPARATOR_HOVER: u32 = 0x4E5157;
const SEPARATOR_ACTIVE: u32 = 0x3574F0;
const SEPARATOR_DISABLED: u32 = 0x2A2B2E;
const GRIP: u32 = 0x6F737A;
const BUTTON: u32 = 0x5A5D63;
const BUTTON_HOVER: u32 = 0x7A7E85;
const BUTTON_DISABLED: u32 = 0x35373B;
const COLLAPSED_TINT: u32 = 0x000000;

/// Everything a frame needs, in logical pixels
pub struct Scene {
    pub layout: PaneLayout,
    pub collapsed: [bool; 3],
    pub availability: Availability,
    pub active_separator: Option<SeparatorId>,
    pub hovered: HitTarget,
}

pub struct Renderer {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        Ok(Self {
            window,
            surface,
            width: 0,
            height: 0,
        })
    }

    pub fn render(&mut self, scene: &Scene) -> Result<()> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // minimized
            return Ok(());
        };

        if size.width != self.width || size.height != self.height {
            self.surface
                .resize(width, height)
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
            self.width = size.width;
            self.height = size.height;
        }

        let scale = self.window.scale_factor();
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;

        let mut frame = Frame::new(&mut buffer, size.width as usize, size.height as usize);
        draw_scene(&mut frame, scene, scale);

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present frame: {}", e))?;
        Ok(())
    }
}

fn draw_scene(frame: &mut Frame, scene: &Scene, scale: f64) {
    frame.clear(BACKGROUND);

    for id in PanelId::ALL {
        let rect = scene.layout.panel(id).scaled(scale);
        frame.fill_rect(rect, PANEL_COLORS[id.index()]);
        frame.stroke_rect(rect, PANEL_BORDER);
        if scene.collapsed[id.index()] {
            frame.blend_rect(rect, COLLAPSED_TINT, 0.25);
        }
    }

    for id in SeparatorId::ALL {
        draw_separator(frame, scene, id, scale);
    }

    for id in PanelId::ALL {
        draw_button(frame, scene, id, scale);
    }
}

fn draw_separator(frame: &mut Frame, scene: &Scene, id: SeparatorId, scale: f64) {
    let logical = scene.layout.separator(id);
    let color = if scene.active_separator == Some(id) {
        SEPARATOR_ACTIVE
    } else if !scene.availability.separator_enabled(id) {
        SEPARATOR_DISABLED
    } else if scene.hovered == HitTarget::Separator(id) {
        SEPARATOR_HOVER
    } else {
        SEPARATOR
    };
    frame.fill_rect(logical.scaled(scale), color);

    if scene.availability.separator_enabled(id) {
        // three grip dots centred vertically
        let cx = logical.x + logical.width / 2.0;
        let cy = logical.y + logical.height / 2.0;
        for dy in [-6.0, 0.0, 6.0] {
            let dot = Rect::new(cx - 1.5, cy + dy - 1.5, 3.0, 3.0);
            frame.fill_rect(dot.scaled(scale), GRIP);
        }
    }
}

fn draw_button(frame: &mut Frame, scene: &Scene, id: PanelId, scale: f64) {
    let logical = scene.layout.button(id);
    let enabled = scene.availability.button_enabled(id);
    let color = if !enabled {
        BUTTON_DISABLED
    } else if scene.hovered == HitTarget::CollapseButton(id) {
        BUTTON_HOVER
    } else {
        BUTTON
    };
    frame.fill_rect(logical.scaled(scale), color);

    // bar when expanded, hollow square when collapsed
    let glyph = logical.inset(5.0);
    if scene.collapsed[id.index()] {
        frame.stroke_rect(glyph.scaled(scale), BACKGROUND);
    } else {
        let bar = Rect::new(glyph.x, glyph.y + glyph.height / 2.0 - 1.0, glyph.width, 2.0);
        frame.fill_rect(bar.scaled(scale), BACKGROUND);
    }
}
