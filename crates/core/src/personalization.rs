//! Personalization input types.

use serde::{Deserialize, Serialize};

/// The customer-supplied customization applied to a book template.
///
/// Snapshots of this struct travel with cart items and preview requests.
/// Equality covers every field, so two personalizations compare equal only
/// when they would produce an identical book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    /// The child's name, printed throughout the book.
    pub child_name: String,

    /// Selected cover color.
    pub cover_color: CoverColor,

    /// Optional dedication printed on the opening page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedication: Option<String>,

    /// Storefront locale tag (e.g. `en-US`).
    pub locale: String,

    /// Identifier of the story template the book is built from.
    pub theme_id: String,
}

/// The eight selectable cover colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverColor {
    Blue,
    Pink,
    Purple,
    Green,
    Yellow,
    Red,
    Orange,
    Teal,
}

impl CoverColor {
    /// Every selectable color, in display order.
    pub const ALL: [Self; 8] = [
        Self::Blue,
        Self::Pink,
        Self::Purple,
        Self::Green,
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Teal,
    ];

    /// The color's lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Teal => "teal",
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cover_color_round_trips_through_wire_names() -> TestResult {
        for color in CoverColor::ALL {
            let json = serde_json::to_string(&color)?;

            assert_eq!(json, format!("\"{}\"", color.as_str()));
            assert_eq!(serde_json::from_str::<CoverColor>(&json)?, color);
        }

        Ok(())
    }

    #[test]
    fn personalization_uses_camel_case_field_names() -> TestResult {
        let personalization = Personalization {
            child_name: "Emma".to_string(),
            cover_color: CoverColor::Blue,
            dedication: None,
            locale: "en-US".to_string(),
            theme_id: "1".to_string(),
        };

        let json = serde_json::to_value(&personalization)?;

        assert!(json.get("childName").is_some(), "expected childName key");
        assert!(json.get("themeId").is_some(), "expected themeId key");
        assert!(
            json.get("dedication").is_none(),
            "absent dedication should be omitted"
        );

        Ok(())
    }

    #[test]
    fn equal_personalizations_hash_identically() {
        let a = Personalization {
            child_name: "Maya".to_string(),
            cover_color: CoverColor::Teal,
            dedication: Some("With love".to_string()),
            locale: "en-US".to_string(),
            theme_id: "3".to_string(),
        };
        let b = a.clone();

        assert_eq!(a, b);
    }
}
