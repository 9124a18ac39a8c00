//! Headless layout replay
//!
//! Runs a script of layout messages against an in-memory container and
//! prints the layout after every step as JSON lines.
//!
//! ```yaml
//! - op: initialize
//! - op: separator_pointer_down
//!   separator: second
//!   x: 614.5
//! - op: pointer_move
//!   x: 700
//! - op: pointer_up
//! - op: toggle_panel
//!   panel: first
//! ```
//!
//! Usage: tripane-replay script.yaml [--width 1000] [--offset 0]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use tripane::commands::Cmd;
use tripane::config::LayoutConfig;
use tripane::controller::LayoutController;
use tripane::geometry::MemoryGeometry;
use tripane::messages::LayoutMsg;
use tripane::update::update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScriptFormat {
    Yaml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tripane-replay", about = "Replay layout messages headlessly")]
struct Args {
    /// Script file (a list of layout messages)
    script: PathBuf,

    /// Script format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<ScriptFormat>,

    /// Container width in pixels
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Page x-coordinate of the container's left edge
    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    /// Layout config (YAML); defaults are used when omitted
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// One output line
#[derive(Debug, Serialize)]
struct Step<'a> {
    step: usize,
    op: &'a str,
    cmd: Option<String>,
    animating: bool,
    widths: [f64; 3],
    collapsed: [bool; 3],
    separators_enabled: [bool; 2],
    buttons_enabled: [bool; 3],
    dragging: bool,
}

fn detect_format(path: &Path) -> ScriptFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ScriptFormat::Json,
        _ => ScriptFormat::Yaml,
    }
}

fn read_script(path: &Path, format: ScriptFormat) -> Result<Vec<LayoutMsg>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let msgs = match format {
        ScriptFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML script {}", path.display()))?,
        ScriptFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON script {}", path.display()))?,
    };
    Ok(msgs)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => LayoutConfig::load_from(path),
        None => LayoutConfig::default(),
    };

    let format = args.format.unwrap_or_else(|| detect_format(&args.script));
    let script = read_script(&args.script, format)?;

    let geometry = MemoryGeometry::from_config(&config, args.width)
        .with_offset(args.offset)
        .without_request_log();
    let mut controller = LayoutController::with_config(geometry, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (index, msg) in script.into_iter().enumerate() {
        let op = msg.name();
        let cmd = Cmd::from(update(&mut controller, msg));

        let state = controller.state();
        let availability = controller.availability();
        let step = Step {
            step: index + 1,
            op,
            cmd: (cmd != Cmd::None).then(|| format!("{:?}", cmd)),
            animating: cmd.is_animating(),
            widths: state.widths(),
            collapsed: state.collapsed_flags(),
            separators_enabled: availability.separators_disabled.map(|d| !d),
            buttons_enabled: availability.buttons_disabled.map(|d| !d),
            dragging: controller.drag().is_active(),
        };
        serde_json::to_writer(&mut out, &step)?;
        writeln!(out)?;
    }

    Ok(())
}
