use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Initialise the terminal: enter raw mode + alternate screen.
///
/// Also chains a panic hook that puts the terminal back first, otherwise the
/// panic message is lost in the alternate screen.
pub fn init() -> Result<Terminal> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
