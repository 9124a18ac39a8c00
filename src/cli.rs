//! Command-line argument parsing for the demo window
//!
//! Supports:
//! - Initial window size
//! - Alternate config file
//! - Skipping session restore

use clap::Parser;
use std::path::PathBuf;

use crate::config::LayoutConfig;

/// A three-panel split layout
#[derive(Parser, Debug)]
#[command(name = "tripane", version, about = "A three-panel split layout")]
pub struct CliArgs {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Read configuration from this file instead of the user config
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start from a fresh layout (ignore the saved session)
    #[arg(short = 'n', long)]
    pub no_restore: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_size: (u32, u32),
    pub layout: LayoutConfig,
    /// Whether to restore and save the layout snapshot
    pub restore_session: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err("Window size must be non-zero".to_string());
        }

        let layout = match &self.config {
            Some(path) if !path.exists() => {
                return Err(format!("Config file not found: {}", path.display()));
            }
            Some(path) => LayoutConfig::load_from(path),
            None => LayoutConfig::load(),
        };
        let restore_session = layout.restore_session && !self.no_restore;

        Ok(StartupConfig {
            window_size: (self.width, self.height),
            layout,
            restore_session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("tripane").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.width, 1000);
        assert_eq!(args.height, 600);
        assert!(args.config.is_none());
        assert!(!args.no_restore);
    }

    #[test]
    fn test_explicit_config_and_no_restore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "collapsed_width: 30\nrestore_session: true\n").unwrap();

        let config = parse(&["--config", path.to_str().unwrap(), "-n", "--width", "1200"])
            .into_config()
            .unwrap();
        assert_eq!(config.window_size, (1200, 600));
        assert_eq!(config.layout.collapsed_width, 30.0);
        assert!(!config.restore_session);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = parse(&["--config", "/definitely/not/here.yaml"]).into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_size_is_an_error() {
        assert!(parse(&["--width", "0"]).into_config().is_err());
    }
}
