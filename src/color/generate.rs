use std::fmt;
use std::str::FromStr;

use rand::RngExt;
use thiserror::Error;

use super::{channels, to_hex};

const ANALOGOUS_SHIFT: u8 = 30;

/// Generate a uniformly random color over the whole 24-bit space.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    let value: u32 = rng.random_range(0..=0xFF_FFFF);
    format!("#{value:06x}")
}

/// Channel transforms used to derive a related color from a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harmony {
    Complementary,
    /// Rotates the channels (R<-G, G<-B, B<-R); this is not a hue rotation.
    Triadic,
    Analogous,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown harmony mode '{0}'")]
pub struct ParseHarmonyError(pub String);

impl Harmony {
    pub const ALL: [Harmony; 3] = [Harmony::Complementary, Harmony::Triadic, Harmony::Analogous];

    pub fn label(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Triadic => "triadic",
            Harmony::Analogous => "analogous",
        }
    }

    /// Derive a color from `base`. Deterministic for every mode.
    pub fn apply(&self, base: &str) -> String {
        let (r, g, b) = channels(base);
        match self {
            Harmony::Complementary => to_hex(255 - r, 255 - g, 255 - b),
            Harmony::Triadic => to_hex(g, b, r),
            Harmony::Analogous => to_hex(
                r.saturating_add(ANALOGOUS_SHIFT),
                g.saturating_sub(ANALOGOUS_SHIFT),
                b.saturating_add(ANALOGOUS_SHIFT),
            ),
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Harmony {
    type Err = ParseHarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Harmony::ALL
            .into_iter()
            .find(|harmony| harmony.label() == s)
            .ok_or_else(|| ParseHarmonyError(s.to_string()))
    }
}

/// Derive a color from `base` using the named harmony `mode`.
///
/// An unrecognized mode yields a fresh random color rather than an error.
pub fn harmonious_color(base: &str, mode: &str) -> String {
    match mode.parse::<Harmony>() {
        Ok(harmony) => harmony.apply(base),
        Err(_) => random_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;

    fn sample_colors(count: usize) -> Vec<String> {
        let mut colors = vec![
            "#000000".to_string(),
            "#ffffff".to_string(),
            "#ff0000".to_string(),
            "#0a0b0c".to_string(),
        ];
        colors.extend((0..count).map(|_| random_color()));
        colors
    }

    #[test]
    fn test_random_color_format() {
        for _ in 0..1000 {
            let color = random_color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(
                color[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "unexpected color {color}"
            );
        }
    }

    #[test]
    fn test_complementary() {
        assert_eq!(harmonious_color("#FF0000", "complementary"), "#00ffff");
        assert_eq!(harmonious_color("#4ECDC4", "complementary"), "#b1323b");
    }

    #[test]
    fn test_triadic_rotates_channels() {
        assert_eq!(harmonious_color("#112233", "triadic"), "#223311");
    }

    #[test]
    fn test_analogous_clamps() {
        assert_eq!(harmonious_color("#102030", "analogous"), "#2e024e");
        assert_eq!(harmonious_color("#F010F0", "analogous"), "#ff00ff");
        assert_eq!(harmonious_color("#E11EE1", "analogous"), "#ff00ff");
    }

    #[test]
    fn test_double_complement_is_identity() {
        for color in sample_colors(500) {
            let once = harmonious_color(&color, "complementary");
            let twice = harmonious_color(&once, "complementary");
            assert_eq!(twice, color);
        }
    }

    #[test]
    fn test_triadic_three_times_is_identity() {
        for color in sample_colors(500) {
            let mut rotated = color.clone();
            for _ in 0..3 {
                rotated = harmonious_color(&rotated, "triadic");
            }
            assert_eq!(rotated, color);
        }
    }

    #[test]
    fn test_identity_properties_normalize_case() {
        assert_eq!(
            harmonious_color(&harmonious_color("#ABCDEF", "complementary"), "complementary"),
            "#abcdef"
        );
    }

    #[test]
    fn test_unknown_mode_falls_back_to_random() {
        for mode in ["", "Complementary", "tetradic"] {
            assert!(is_valid_hex(&harmonious_color("#123456", mode)));
        }
    }

    #[test]
    fn test_harmony_parse_and_display() {
        for harmony in Harmony::ALL {
            assert_eq!(harmony.to_string().parse::<Harmony>(), Ok(harmony));
        }
        assert_eq!(
            "split".parse::<Harmony>(),
            Err(ParseHarmonyError("split".to_string()))
        );
    }
}
