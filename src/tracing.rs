//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag
//! sessions and collapse/expand transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug` - width changes per message
//! - `RUST_LOG=tripane::controller=trace` - every pointer move
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tripane/logs/tripane.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{LayoutState, WIDTH_EPSILON};
use crate::panel::PanelId;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/tripane/logs/tripane.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tripane.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel widths/flags for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct WidthsSnapshot {
    pub widths: [f64; 3],
    pub collapsed: [bool; 3],
}

impl WidthsSnapshot {
    pub fn from_state(state: &LayoutState) -> Self {
        Self {
            widths: state.widths(),
            collapsed: state.collapsed_flags(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &WidthsSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        for id in PanelId::ALL {
            let i = id.index();
            if (self.widths[i] - other.widths[i]).abs() > WIDTH_EPSILON {
                changes.push(format!(
                    "{}: {:.1} → {:.1}",
                    id.display_name(),
                    self.widths[i],
                    other.widths[i]
                ));
            }
            if self.collapsed[i] != other.collapsed[i] {
                let status = if other.collapsed[i] {
                    "collapsed"
                } else {
                    "expanded"
                };
                changes.push(format!("{}: {}", id.display_name(), status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
