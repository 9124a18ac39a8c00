//! Window-backed geometry with animated width transitions
//!
//! The layout core sees settled (target) widths; rendering asks for the
//! displayed width, which eases towards the target over the configured
//! animation duration.

use std::time::{Duration, Instant};

use tripane::config::LayoutConfig;
use tripane::geometry::{GeometryProvider, MemoryGeometry, Transition};
use tripane::panel::{PanelId, SeparatorId};

/// Horizontal inset of the container inside the window (logical pixels)
pub const CONTAINER_MARGIN: f64 = 8.0;

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f64,
    to: f64,
    start: Instant,
}

pub struct WindowGeometry {
    settled: MemoryGeometry,
    tweens: [Option<Tween>; 3],
    duration: Duration,
}

impl WindowGeometry {
    pub fn new(config: &LayoutConfig, window_width: f64) -> Self {
        let settled = MemoryGeometry::from_config(config, container_width_for(window_width))
            .with_offset(CONTAINER_MARGIN)
            .without_request_log();
        Self {
            settled,
            tweens: [None; 3],
            duration: Duration::from_millis(config.animation_ms),
        }
    }

    /// Track a new window width (logical pixels)
    pub fn set_window_width(&mut self, window_width: f64) {
        self.settled
            .set_container_width(container_width_for(window_width));
    }

    /// Width to draw right now, following any running transition
    pub fn displayed_width(&self, panel: PanelId, now: Instant) -> f64 {
        let target = self.settled.panel_width(panel);
        let Some(tween) = self.tweens[panel.index()] else {
            return target;
        };
        let t = self.progress(tween, now);
        if t >= 1.0 {
            return tween.to;
        }
        tween.from + (tween.to - tween.from) * ease_out_cubic(t)
    }

    /// Whether any transition is still playing
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tweens
            .iter()
            .flatten()
            .any(|tween| self.progress(*tween, now) < 1.0)
    }

    /// Drop finished transitions
    pub fn settle(&mut self, now: Instant) {
        let duration = self.duration;
        for slot in &mut self.tweens {
            if let Some(tween) = slot {
                if progress(tween.start, duration, now) >= 1.0 {
                    *slot = None;
                }
            }
        }
    }

    fn progress(&self, tween: Tween, now: Instant) -> f64 {
        progress(tween.start, self.duration, now)
    }
}

fn container_width_for(window_width: f64) -> f64 {
    (window_width - 2.0 * CONTAINER_MARGIN).max(0.0)
}

fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start).as_secs_f64();
    (elapsed / duration.as_secs_f64()).min(1.0)
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

impl GeometryProvider for WindowGeometry {
    fn container_width(&self) -> f64 {
        self.settled.container_width()
    }

    fn container_offset_x(&self) -> f64 {
        self.settled.container_offset_x()
    }

    fn panel_width(&self, panel: PanelId) -> f64 {
        self.settled.panel_width(panel)
    }

    fn panel_min_width(&self, panel: PanelId) -> f64 {
        self.settled.panel_min_width(panel)
    }

    fn is_collapsed(&self, panel: PanelId) -> bool {
        self.settled.is_collapsed(panel)
    }

    fn set_collapsed(&mut self, panel: PanelId, collapsed: bool) {
        self.settled.set_collapsed(panel, collapsed);
    }

    fn apply_width(&mut self, panel: PanelId, width: f64, transition: Transition) {
        let now = Instant::now();
        self.tweens[panel.index()] = match transition {
            Transition::Animated if !self.duration.is_zero() => Some(Tween {
                from: self.displayed_width(panel, now),
                to: width,
                start: now,
            }),
            _ => None,
        };
        self.settled.apply_width(panel, width, transition);
    }

    fn is_separator_disabled(&self, separator: SeparatorId) -> bool {
        self.settled.is_separator_disabled(separator)
    }

    fn set_separator_disabled(&mut self, separator: SeparatorId, disabled: bool) {
        self.settled.set_separator_disabled(separator, disabled);
    }

    fn is_button_disabled(&self, panel: PanelId) -> bool {
        self.settled.is_button_disabled(panel)
    }

    fn set_button_disabled(&mut self, panel: PanelId, disabled: bool) {
        self.settled.set_button_disabled(panel, disabled);
    }
}
