mod state;

use crossterm::event::KeyCode;

pub use state::{App, ConfirmPopup, SavePalettePopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Generator,
    Saved,
    Help,
}

/// Views reachable from the tab bar, in display order.
pub const TABS: [AppView; 2] = [AppView::Generator, AppView::Saved];
