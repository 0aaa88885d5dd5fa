//! Cover color palettes.

use crate::personalization::CoverColor;

/// The palette bound to a selectable cover color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Dominant color, used for text overlays and accents on artwork.
    pub primary: &'static str,

    /// Darker companion to the primary color.
    pub secondary: &'static str,

    /// Highlight color.
    pub accent: &'static str,

    /// Page background color.
    pub background: &'static str,
}

impl ColorScheme {
    /// Primary color as a bare hex value, without the leading `#`.
    #[must_use]
    pub fn primary_hex(&self) -> &'static str {
        self.primary.trim_start_matches('#')
    }

    /// Background color as a bare hex value, without the leading `#`.
    #[must_use]
    pub fn background_hex(&self) -> &'static str {
        self.background.trim_start_matches('#')
    }
}

/// Look up the palette for a cover color.
///
/// The match is exhaustive over [`CoverColor`], so every color has exactly
/// one scheme and the lookup is total.
#[must_use]
pub const fn scheme(color: CoverColor) -> ColorScheme {
    match color {
        CoverColor::Blue => ColorScheme {
            primary: "#3B82F6",
            secondary: "#1E40AF",
            accent: "#60A5FA",
            background: "#EFF6FF",
        },
        CoverColor::Pink => ColorScheme {
            primary: "#EC4899",
            secondary: "#BE185D",
            accent: "#F472B6",
            background: "#FDF2F8",
        },
        CoverColor::Purple => ColorScheme {
            primary: "#8B5CF6",
            secondary: "#6D28D9",
            accent: "#A78BFA",
            background: "#F3E8FF",
        },
        CoverColor::Green => ColorScheme {
            primary: "#10B981",
            secondary: "#059669",
            accent: "#34D399",
            background: "#ECFDF5",
        },
        CoverColor::Yellow => ColorScheme {
            primary: "#F59E0B",
            secondary: "#D97706",
            accent: "#FBBF24",
            background: "#FFFBEB",
        },
        CoverColor::Red => ColorScheme {
            primary: "#EF4444",
            secondary: "#DC2626",
            accent: "#F87171",
            background: "#FEF2F2",
        },
        CoverColor::Orange => ColorScheme {
            primary: "#F97316",
            secondary: "#EA580C",
            accent: "#FB923C",
            background: "#FFF7ED",
        },
        CoverColor::Teal => ColorScheme {
            primary: "#14B8A6",
            secondary: "#0D9488",
            accent: "#5EEAD4",
            background: "#F0FDFA",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_has_a_distinct_palette() {
        let mut primaries: Vec<&str> = CoverColor::ALL
            .into_iter()
            .map(|color| scheme(color).primary)
            .collect();

        primaries.sort_unstable();
        primaries.dedup();

        assert_eq!(
            primaries.len(),
            CoverColor::ALL.len(),
            "palettes should not repeat primary colors"
        );
    }

    #[test]
    fn hex_accessors_strip_the_hash_prefix() {
        let blue = scheme(CoverColor::Blue);

        assert_eq!(blue.primary_hex(), "3B82F6");
        assert_eq!(blue.background_hex(), "EFF6FF");
    }
}
