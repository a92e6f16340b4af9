mod app;
mod cli;
mod color;
mod event;
mod logging;
mod palette;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let log_path = cli_opts
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli_opts.log_level())?;
    info!(version = env!("CARGO_PKG_VERSION"), seed = ?cli_opts.seed, "starting palettr");

    let mut app = app::App::new(cli_opts.seed);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);
    let restored = tui::restore();

    first_error(result, restored)
}

/// The event loop's error wins over a failed terminal restore.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}
