use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use tripane::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    tripane::tracing::init();
    tracing::debug!(
        "Starting with window {}x{}, restore_session={}",
        startup.window_size.0,
        startup.window_size.1,
        startup.restore_session
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}
