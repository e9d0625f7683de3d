use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rusqlite::Connection;

use crate::config::Settings;
use crate::library::Library;
use crate::palette::{self, Palette};
use crate::types::{GenerationMode, PALETTE_SIZE, PaletteId, SavedPalette};

use super::{AppEvent, AppView, TABS};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub settings: Settings,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub palette: Palette,
    pub library: Library,
    pub mode: GenerationMode,
    pub selected_slot: usize,
    pub selected_saved_index: usize,
    pub selected_pinned_index: usize,
    pub show_accessibility: bool,
    pub generating_since: Option<Instant>,
    pub status: Option<String>,
    /// Color waiting to be written to the system clipboard by the event loop.
    pub clipboard: Option<String>,
    pub save_popup: Option<SavePalettePopup>,
    pub confirm_popup: Option<ConfirmPopup>,
}

#[derive(Clone, Debug, Default)]
pub struct SavePalettePopup {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub message: String,
    pub palette_id: PaletteId,
}

impl App {
    pub fn new(db: Connection, settings: Settings) -> Self {
        let library = match Library::load(&db) {
            Ok(library) => library,
            Err(e) => {
                log::error!("Failed to load saved palettes: {e}");
                Library::default()
            }
        };
        Self {
            running: true,
            db,
            mode: settings.default_mode,
            settings,
            view: AppView::Generator,
            view_history: Vec::new(),
            palette: Palette::random(),
            library,
            selected_slot: 0,
            selected_saved_index: 0,
            selected_pinned_index: 0,
            show_accessibility: false,
            generating_since: None,
            status: None,
            clipboard: None,
            save_popup: None,
            confirm_popup: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating_since.is_some()
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.finish_generation_if_due(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.save_popup.is_some() {
            self.handle_save_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Char('v') => self.navigate_to(AppView::Saved),
            KeyCode::Char('g') => self.navigate_to(AppView::Generator),
            KeyCode::Tab => self.next_tab(),
            KeyCode::Esc => self.go_back(),
            _ => match self.view {
                AppView::Generator => self.handle_generator_key(key),
                AppView::Saved => self.handle_saved_key(key),
                AppView::Help => {}
            },
        }
    }

    fn handle_generator_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(' ') => self.start_generation(),
            KeyCode::Left => {
                self.selected_slot = self.selected_slot.checked_sub(1).unwrap_or(PALETTE_SIZE - 1);
            }
            KeyCode::Right => self.selected_slot = (self.selected_slot + 1) % PALETTE_SIZE,
            KeyCode::Char('l') => self.toggle_lock(self.selected_slot),
            KeyCode::Char(ch @ '1'..='5') => {
                let index = ch as usize - '1' as usize;
                self.selected_slot = index;
                self.toggle_lock(index);
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggle();
                self.set_status(format!("Mode: {}", self.mode.label()));
            }
            KeyCode::Char('a') => self.show_accessibility = !self.show_accessibility,
            KeyCode::Char('s') => self.save_popup = Some(SavePalettePopup::default()),
            KeyCode::Char('x') => self.export_palette(),
            KeyCode::Char('c') => self.copy_selected(),
            KeyCode::Up => {
                self.selected_pinned_index = self.selected_pinned_index.saturating_sub(1);
            }
            KeyCode::Down => {
                let pinned = self.library.pinned().len();
                if self.selected_pinned_index + 1 < pinned {
                    self.selected_pinned_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(saved) = self.selected_pinned().cloned() {
                    self.load_palette(&saved);
                }
            }
            KeyCode::Char('u') => {
                if let Some(id) = self.selected_pinned().map(|saved| saved.id.clone()) {
                    self.toggle_pin(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_saved_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.selected_saved_index = self.selected_saved_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_saved_index + 1 < self.library.palettes.len() {
                    self.selected_saved_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(saved) = self.selected_saved().cloned() {
                    self.load_palette(&saved);
                    self.view_history.clear();
                    self.view = AppView::Generator;
                }
            }
            KeyCode::Char('p') => {
                if let Some(id) = self.selected_saved().map(|saved| saved.id.clone()) {
                    self.toggle_pin(&id);
                }
            }
            KeyCode::Char('d') => {
                let popup = self.selected_saved().map(|saved| ConfirmPopup {
                    message: format!("Delete palette '{}'?", saved.name),
                    palette_id: saved.id.clone(),
                });
                if popup.is_some() {
                    self.confirm_popup = popup;
                }
            }
            _ => {}
        }
    }

    fn handle_save_key(&mut self, key: KeyCode) {
        let Some(popup) = self.save_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.save_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_save_popup(),
            KeyCode::Backspace | KeyCode::Delete => {
                popup.name.pop();
            }
            KeyCode::Char(ch) => {
                if !ch.is_control() {
                    popup.name.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(popup) = self.confirm_popup.take() {
                    self.delete_palette(&popup.palette_id);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_popup = None;
            }
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view == view {
            return;
        }
        if let Some(index) = self.view_history.iter().position(|past| *past == view) {
            self.view_history.truncate(index);
        } else {
            self.view_history.push(self.view.clone());
        }
        self.view = view;
    }

    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.view = view;
        }
    }

    fn next_tab(&mut self) {
        let index = TABS.iter().position(|view| *view == self.view).unwrap_or(0);
        self.view = TABS[(index + 1) % TABS.len()].clone();
    }

    fn start_generation(&mut self) {
        if self.generating_since.is_none() {
            self.generating_since = Some(Instant::now());
        }
        self.finish_generation_if_due();
    }

    fn finish_generation_if_due(&mut self) {
        let Some(started) = self.generating_since else {
            return;
        };
        if started.elapsed() < Duration::from_millis(self.settings.generation_delay_ms) {
            return;
        }
        self.generating_since = None;
        self.palette.regenerate(self.mode);
        log::debug!("Regenerated palette ({})", self.mode.label());
    }

    fn toggle_lock(&mut self, index: usize) {
        self.palette.toggle_lock(index);
        if let Some(slot) = self.palette.slots().get(index) {
            let state = if slot.locked { "Locked" } else { "Unlocked" };
            self.set_status(format!("{state} {}", slot.hex));
        }
    }

    fn copy_selected(&mut self) {
        let Some(slot) = self.palette.slots().get(self.selected_slot) else {
            return;
        };
        let hex = slot.hex.clone();
        log::debug!("Copying {hex} to the clipboard");
        self.set_status(format!("Copied {hex}"));
        self.clipboard = Some(hex);
    }

    pub fn selected_saved(&self) -> Option<&SavedPalette> {
        self.library.palettes.get(self.selected_saved_index)
    }

    pub fn selected_pinned(&self) -> Option<&SavedPalette> {
        self.library.pinned().get(self.selected_pinned_index).copied()
    }

    fn load_palette(&mut self, saved: &SavedPalette) {
        self.palette = Palette::from_colors(&saved.colors);
        self.generating_since = None;
        self.set_status(format!("Loaded '{}'", saved.name));
    }

    fn apply_save_popup(&mut self) {
        let Some(popup) = self.save_popup.take() else {
            return;
        };
        let saved = self.library.save(&popup.name, self.palette.hexes());
        let message = format!("Saved '{}'", saved.name);
        self.persist_library();
        self.set_status(message);
    }

    fn toggle_pin(&mut self, id: &str) {
        let pinned = self.library.toggle_pin(id);
        self.clamp_selections();
        self.persist_library();
        let message = if pinned { "Pinned palette" } else { "Unpinned palette" };
        self.set_status(message.to_string());
    }

    fn delete_palette(&mut self, id: &str) {
        if self.library.delete(id) {
            self.clamp_selections();
            self.persist_library();
            self.set_status("Deleted palette".to_string());
        }
    }

    fn clamp_selections(&mut self) {
        let saved = self.library.palettes.len();
        self.selected_saved_index = self.selected_saved_index.min(saved.saturating_sub(1));
        let pinned = self.library.pinned().len();
        self.selected_pinned_index = self.selected_pinned_index.min(pinned.saturating_sub(1));
    }

    fn persist_library(&mut self) {
        if let Err(e) = self.library.persist(&self.db) {
            log::error!("Failed to persist palettes: {e}");
            self.set_status(format!("Failed to save: {e}"));
        }
    }

    fn export_palette(&mut self) {
        let css = palette::export_css(&self.palette.hexes());
        let path = self.settings.export_path.clone();
        match std::fs::write(&path, css) {
            Ok(()) => {
                log::info!("Exported palette to {}", path.display());
                self.set_status(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export palette: {e}");
                self.set_status(format!("Export failed: {e}"));
            }
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    fn app() -> App {
        let settings = Settings {
            generation_delay_ms: 0,
            ..Settings::default()
        };
        App::new(store::init_in_memory().unwrap(), settings)
    }

    fn press(app: &mut App, key: KeyCode) {
        app.update(AppEvent::KeyPress(key));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_space_regenerates_unlocked_slots() {
        let mut app = app();
        app.palette = Palette::from_colors(&["#4ECDC4".to_string()]);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));

        assert!(!app.is_generating());
        assert_eq!(app.palette.slots()[0].hex, "#4ECDC4");
        assert!(app.palette.slots()[0].locked);
    }

    #[test]
    fn test_generation_waits_for_delay() {
        let mut app = app();
        app.settings.generation_delay_ms = 60_000;
        let before = app.palette.clone();
        press(&mut app, KeyCode::Char(' '));
        app.update(AppEvent::Tick);
        assert!(app.is_generating());
        assert_eq!(app.palette, before);

        app.settings.generation_delay_ms = 0;
        app.update(AppEvent::Tick);
        assert!(!app.is_generating());
    }

    #[test]
    fn test_lock_selected_slot() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('l'));
        assert!(app.palette.slots()[2].locked);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_slot, PALETTE_SIZE - 1);
    }

    #[test]
    fn test_mode_and_overlay_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.mode, GenerationMode::Harmonious);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.show_accessibility);
    }

    #[test]
    fn test_save_popup_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "Ocean q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert!(app.save_popup.is_none());
        assert!(app.running);
        assert_eq!(app.library.palettes.len(), 1);
        assert_eq!(app.library.palettes[0].name, "Ocean");
        assert_eq!(app.library.palettes[0].colors, app.palette.hexes());
        assert_eq!(Library::load(&app.db).unwrap(), app.library);
    }

    #[test]
    fn test_save_popup_blank_name_uses_default() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.library.palettes[0].name, "Untitled Palette");
    }

    #[test]
    fn test_save_popup_escape_cancels() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "nope");
        press(&mut app, KeyCode::Esc);
        assert!(app.save_popup.is_none());
        assert!(app.library.palettes.is_empty());
    }

    #[test]
    fn test_load_saved_palette_unlocks_all() {
        let mut app = app();
        let colors = vec![
            "#FF6B6B".to_string(),
            "#4ECDC4".to_string(),
            "#45B7D1".to_string(),
            "#96CEB4".to_string(),
            "#FFEAA7".to_string(),
        ];
        app.library.save("Named", colors.clone());
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view, AppView::Saved);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.view, AppView::Generator);
        assert_eq!(app.palette.hexes(), colors);
        assert_eq!(app.palette.slots()[1].name, "Turquoise");
        assert!(app.palette.slots().iter().all(|slot| !slot.locked));
    }

    #[test]
    fn test_pin_and_delete_from_saved_view() {
        let mut app = app();
        let id = app.library.save("Pinned", app.palette.hexes()).id.clone();
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Char('p'));
        assert!(app.library.is_pinned(&id));

        press(&mut app, KeyCode::Char('d'));
        assert!(app.confirm_popup.is_some());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.library.palettes.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.library.palettes.is_empty());
        assert!(app.library.pins.is_empty());
        assert_eq!(Library::load(&app.db).unwrap(), Library::default());
    }

    #[test]
    fn test_pinned_quick_load_and_unpin() {
        let mut app = app();
        let colors = vec!["#000000".to_string(); PALETTE_SIZE];
        let id = app.library.save("Night", colors.clone()).id.clone();
        app.library.toggle_pin(&id);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.palette.hexes(), colors);

        press(&mut app, KeyCode::Char('u'));
        assert!(!app.library.is_pinned(&id));
        assert!(app.selected_pinned().is_none());
    }

    #[test]
    fn test_export_writes_css() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        app.settings.export_path = dir.path().join("color-palette.css");
        press(&mut app, KeyCode::Char('x'));
        let written = std::fs::read_to_string(&app.settings.export_path).unwrap();
        assert_eq!(written, palette::export_css(&app.palette.hexes()));
    }

    #[test]
    fn test_help_toggle_and_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, AppView::Help);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, AppView::Generator);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Saved);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, AppView::Generator);
    }

    #[test]
    fn test_retrigger_keeps_pending_generation() {
        let mut app = app();
        app.settings.generation_delay_ms = 60_000;
        press(&mut app, KeyCode::Char(' '));
        let started = app.generating_since;
        assert!(started.is_some());

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.generating_since, started);
    }

    #[test]
    fn test_loading_pinned_cancels_pending_generation() {
        let mut app = app();
        let colors = vec!["#4ECDC4".to_string(); PALETTE_SIZE];
        let id = app.library.save("Teal", colors.clone()).id.clone();
        app.library.toggle_pin(&id);

        app.settings.generation_delay_ms = 60_000;
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_generating());
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_generating());

        app.settings.generation_delay_ms = 0;
        app.update(AppEvent::Tick);
        assert_eq!(app.palette.hexes(), colors);
    }

    #[test]
    fn test_copy_selected_color() {
        let mut app = app();
        app.palette = Palette::from_colors(&["#FF6B6B".to_string(), "#4ECDC4".to_string()]);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.clipboard.as_deref(), Some("#4ECDC4"));
        assert_eq!(app.status.as_deref(), Some("Copied #4ECDC4"));
    }

    #[test]
    fn test_tabbing_keeps_history_empty() {
        let mut app = app();
        for _ in 0..1000 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.view, AppView::Generator);
        assert!(app.view_history.is_empty());

        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('g'));
        assert!(app.view_history.is_empty());
    }

    #[test]
    fn test_escape_after_load_stays_on_generator() {
        let mut app = app();
        app.library.save("Any", app.palette.hexes());
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, AppView::Generator);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Generator);
    }
}
