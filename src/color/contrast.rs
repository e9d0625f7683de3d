use std::fmt;

use super::channels;

/// Pick black or white text for legibility on `hex`.
pub fn text_color(hex: &str) -> &'static str {
    let (r, g, b) = channels(hex);
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    let brightness = f64::from(weighted) / 1000.0;
    if brightness > 128.0 { "#000000" } else { "#ffffff" }
}

/// WCAG 2.x relative luminance in [0, 1].
pub fn relative_luminance(hex: &str) -> f64 {
    let (r, g, b) = channels(hex);
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, rounded to 2 decimals. Range [1, 21].
pub fn accessibility_score(foreground: &str, background: &str) -> f64 {
    let l1 = relative_luminance(foreground);
    let l2 = relative_luminance(background);
    let ratio = (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05);
    (ratio * 100.0).round() / 100.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityGrade {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl AccessibilityGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            AccessibilityGrade::Aaa
        } else if score >= 4.5 {
            AccessibilityGrade::Aa
        } else if score >= 3.0 {
            AccessibilityGrade::AaLarge
        } else {
            AccessibilityGrade::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessibilityGrade::Aaa => "AAA",
            AccessibilityGrade::Aa => "AA",
            AccessibilityGrade::AaLarge => "AA Large",
            AccessibilityGrade::Fail => "Fail",
        }
    }
}

impl fmt::Display for AccessibilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
