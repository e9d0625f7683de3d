use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Short enough that a pending regeneration lands close to its deadline.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<AppEvent> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(AppEvent::KeyPress(key.code));
            }
        }
    }
    Ok(AppEvent::Tick)
}

/// Runs the main event loop until the user quits.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;
        let event = poll(TICK_RATE)?;
        app.update(event);
        if let Some(hex) = app.clipboard.take() {
            if let Err(e) = crate::tui::copy_to_clipboard(terminal, &hex) {
                log::warn!("Failed to copy {hex} to the clipboard: {e}");
            }
        }
    }
    log::info!("Event loop finished");
    Ok(())
}
