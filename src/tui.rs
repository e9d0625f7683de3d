use std::io;

use anyhow::Result;
use crossterm::{
    clipboard::CopyToClipboard,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Enter raw mode + alternate screen. A panic restores the terminal
/// before the default hook prints its message.
pub fn init() -> Result<Terminal> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        default_hook(info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = ratatui::Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok(terminal)
}

/// Leave the alternate screen and raw mode.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Hand text to the terminal's clipboard with an OSC 52 sequence.
pub fn copy_to_clipboard(terminal: &mut Terminal, text: &str) -> Result<()> {
    execute!(terminal.backend_mut(), CopyToClipboard::to_clipboard_from(text))?;
    Ok(())
}
