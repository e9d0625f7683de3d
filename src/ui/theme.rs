use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Pinned palettes
    pub fn pinned() -> Color {
        Color::Yellow
    }

    /// Locked slots
    pub fn locked() -> Color {
        Color::LightRed
    }

    /// Generation in progress
    pub fn active() -> Color {
        Color::LightGreen
    }

    /// Selection/highlight
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for titles and scores
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
