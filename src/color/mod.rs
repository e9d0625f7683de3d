/// Color generation, naming and contrast helpers.
///
/// Colors travel as `#RRGGBB` strings. Nothing in here validates its input:
/// a channel that cannot be read as a hex byte reads as 0.
mod contrast;
mod generate;
mod names;

pub use contrast::{AccessibilityGrade, accessibility_score, text_color};
pub use generate::{Harmony, harmonious_color, random_color};
pub use names::{color_name, named_colors};

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Split a `#RRGGBB` string into its three channels.
pub fn channels(hex: &str) -> (u8, u8, u8) {
    (channel(hex, 1), channel(hex, 3), channel(hex, 5))
}

fn channel(hex: &str, start: usize) -> u8 {
    hex.get(start..start + 2)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .unwrap_or(0)
}

/// Render channels as a lowercase `#rrggbb` string.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
