//! Frame abstraction for drawing primitives
//!
//! Wraps the softbuffer pixel slice so rendering code never indexes the
//! buffer directly.

/// Axis-aligned rectangle. Logical pixels for layout and hit-testing,
/// physical pixels once passed through [`Rect::scaled`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on the left/top edge, exclusive on the right/bottom edge
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn scaled(&self, scale: f64) -> Rect {
        Rect::new(
            self.x * scale,
            self.y * scale,
            self.width * scale,
            self.height * scale,
        )
    }

    /// Shrink on all sides, never below zero size
    pub fn inset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

/// Blend a foreground color onto a background color.
///
/// Both colors are 0x00RRGGBB; the result is fully opaque.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let channel = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b * (1.0 - alpha) + f * alpha) as u32) << shift
    };
    0xFF000000 | channel(16) | channel(8) | channel(0)
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are physical pixels. Out-of-bounds drawing is clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a frame over a pixel buffer. A buffer shorter than
    /// `width * height` shrinks the usable height.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(color);
        }
    }

    /// Fill with `color` at the given opacity over what is already drawn
    pub fn blend_rect(&mut self, rect: Rect, color: u32, alpha: f32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = y * self.width;
            for pixel in &mut self.buffer[row + x0..row + x1] {
                *pixel = blend_colors(*pixel, color, alpha);
            }
        }
    }

    /// One-pixel outline inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), color);
        self.fill_rect(
            Rect::new(rect.x, rect.y + rect.height - 1.0, rect.width, 1.0),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, 1.0, rect.height), color);
        self.fill_rect(
            Rect::new(rect.x + rect.width - 1.0, rect.y, 1.0, rect.height),
            color,
        );
    }

    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = (rect.x.max(0.0).round() as usize).min(self.width);
        let y0 = (rect.y.max(0.0).round() as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0).round() as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0).round() as usize).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}
