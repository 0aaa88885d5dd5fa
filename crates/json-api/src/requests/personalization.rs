//! Personalization payload.
//!
//! The same body shape feeds preview generation, print-asset creation, and
//! cart item additions.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storyloom::personalization::{CoverColor, Personalization};

/// Personalization payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonalizationBody {
    /// The child's name printed throughout the book
    pub child_name: String,

    /// Selected cover color
    pub cover_color: CoverColorParam,

    /// Optional dedication printed on the opening page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedication: Option<String>,

    /// Storefront locale tag
    pub locale: String,

    /// Identifier of the story template
    pub theme_id: String,
}

/// Selectable cover color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CoverColorParam {
    Blue,
    Pink,
    Purple,
    Green,
    Yellow,
    Red,
    Orange,
    Teal,
}

impl From<CoverColorParam> for CoverColor {
    fn from(param: CoverColorParam) -> Self {
        match param {
            CoverColorParam::Blue => Self::Blue,
            CoverColorParam::Pink => Self::Pink,
            CoverColorParam::Purple => Self::Purple,
            CoverColorParam::Green => Self::Green,
            CoverColorParam::Yellow => Self::Yellow,
            CoverColorParam::Red => Self::Red,
            CoverColorParam::Orange => Self::Orange,
            CoverColorParam::Teal => Self::Teal,
        }
    }
}

impl From<CoverColor> for CoverColorParam {
    fn from(color: CoverColor) -> Self {
        match color {
            CoverColor::Blue => Self::Blue,
            CoverColor::Pink => Self::Pink,
            CoverColor::Purple => Self::Purple,
            CoverColor::Green => Self::Green,
            CoverColor::Yellow => Self::Yellow,
            CoverColor::Red => Self::Red,
            CoverColor::Orange => Self::Orange,
            CoverColor::Teal => Self::Teal,
        }
    }
}

impl From<PersonalizationBody> for Personalization {
    fn from(body: PersonalizationBody) -> Self {
        Personalization {
            child_name: body.child_name,
            cover_color: body.cover_color.into(),
            dedication: body.dedication,
            locale: body.locale,
            theme_id: body.theme_id,
        }
    }
}

impl From<Personalization> for PersonalizationBody {
    fn from(personalization: Personalization) -> Self {
        Self {
            child_name: personalization.child_name,
            cover_color: personalization.cover_color.into(),
            dedication: personalization.dedication,
            locale: personalization.locale,
            theme_id: personalization.theme_id,
        }
    }
}
