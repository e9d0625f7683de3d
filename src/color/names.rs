use std::collections::HashMap;
use std::sync::LazyLock;

/// Name reported for any color missing from the table.
pub const UNNAMED_COLOR: &str = "Custom Color";

const NAMED_COLORS: [(&str, &str); 10] = [
    ("#FF6B6B", "Coral Red"),
    ("#4ECDC4", "Turquoise"),
    ("#45B7D1", "Sky Blue"),
    ("#96CEB4", "Mint Green"),
    ("#FFEAA7", "Warm Yellow"),
    ("#DDA0DD", "Plum"),
    ("#98D8C8", "Seafoam"),
    ("#F7DC6F", "Golden"),
    ("#BB8FCE", "Lavender"),
    ("#85C1E9", "Light Blue"),
];

static COLOR_NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAMED_COLORS.into_iter().collect());

/// Look up the friendly name of a color.
///
/// Keys are uppercase `#RRGGBB` and the input is matched as given, so
/// `#4ecdc4` is a "Custom Color" while `#4ECDC4` is "Turquoise".
pub fn color_name(hex: &str) -> &'static str {
    COLOR_NAMES.get(hex).copied().unwrap_or(UNNAMED_COLOR)
}

/// All named colors in table order.
pub fn named_colors() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMED_COLORS.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_color() {
        assert_eq!(color_name("#4ECDC4"), "Turquoise");
        assert_eq!(color_name("#85C1E9"), "Light Blue");
    }

    #[test]
    fn test_unknown_color() {
        assert_eq!(color_name("#123456"), "Custom Color");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(color_name("#4ecdc4"), UNNAMED_COLOR);
    }

    #[test]
    fn test_every_table_entry_resolves() {
        assert_eq!(named_colors().count(), 10);
        for (hex, name) in named_colors() {
            assert_eq!(color_name(hex), name);
        }
    }
}
