use ratatui::style::Color;

use crate::color;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

/// Terminal color for a hex string; `None` unless it is a well-formed `#RRGGBB`.
pub fn hex_to_color(value: &str) -> Option<Color> {
    if !color::is_valid_hex(value) {
        return None;
    }
    let (r, g, b) = color::channels(value);
    Some(Color::Rgb(r, g, b))
}
