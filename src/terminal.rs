//! Terminal setup and teardown.
//!
//! Entering and leaving TUI mode, plus a panic hook that restores the
//! terminal before the panic message prints. A broken terminal after a
//! crash hides the actual failure, so the hook installs first thing in
//! `main`.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Enter TUI mode and build the terminal handle.
pub fn init() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave TUI mode and restore the terminal to a usable state.
///
/// Safe to call multiple times; all errors are ignored since this runs
/// on shutdown and panic paths.
pub fn restore() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
    let _ = stdout.flush();
}

/// Install a panic hook that restores the terminal, then defers to the
/// original hook to print the message.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
