//! Book template catalog.
//!
//! Themes are the fixed set of story templates a book can be built from:
//! an ordered sequence of pages with placeholder text, an interpolation
//! point for the child's name, and an illustration slot per page. The
//! catalog is static, read-only data; personalization never mutates it.

use rustc_hash::FxHashMap;

mod themes;

/// How a page participates in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Front cover: composed from title/subtitle, not body text.
    Cover,
    /// Interior story page.
    Story,
    /// Closing page.
    Ending,
}

/// Content descriptor for a single page.
///
/// Story pages read `lead` + child name + `tail`; cover pages read
/// `title`/`subtitle` instead. `interpolate_name` marks whether the child's
/// name appears on the page at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    /// Cover title, when the page carries one.
    pub title: Option<&'static str>,

    /// Cover subtitle.
    pub subtitle: Option<&'static str>,

    /// Body text preceding the interpolated name.
    pub lead: Option<&'static str>,

    /// Body text following the interpolated name.
    pub tail: Option<&'static str>,

    /// Whether the child's name is interpolated into this page.
    pub interpolate_name: bool,

    /// Identifier of the illustration rendered behind the text.
    pub illustration: &'static str,
}

/// A single page of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTemplate {
    /// 1-based position within the theme. Display order follows this.
    pub page_number: u32,

    /// The page's role in the story.
    pub kind: PageKind,

    /// What the page shows.
    pub content: PageContent,
}

/// A complete story template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Catalog identifier, referenced by [`Personalization::theme_id`].
    ///
    /// [`Personalization::theme_id`]: crate::personalization::Personalization
    pub id: &'static str,

    /// Display title of the story.
    pub title: &'static str,

    /// Display subtitle.
    pub subtitle: &'static str,

    /// Pages in reading order.
    pub pages: &'static [PageTemplate],
}

/// Index over the built-in themes.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: FxHashMap<&'static str, &'static Theme>,
}

impl ThemeCatalog {
    /// Build the catalog over the built-in themes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            themes: themes::THEMES.iter().map(|theme| (theme.id, theme)).collect(),
        }
    }

    /// Resolve a theme id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static Theme> {
        self.themes.get(id).copied()
    }

    /// Number of themes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog holds no themes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Iterate over every theme, in no particular order.
    pub fn themes(&self) -> impl Iterator<Item = &'static Theme> + '_ {
        self.themes.values().copied()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_five_themes() {
        let catalog = ThemeCatalog::new();

        assert_eq!(catalog.len(), 5);

        for id in ["1", "2", "3", "4", "5"] {
            assert!(catalog.get(id).is_some(), "theme {id} should exist");
        }
    }

    #[test]
    fn unknown_theme_is_absent() {
        let catalog = ThemeCatalog::new();

        assert!(catalog.get("99").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn pages_are_numbered_sequentially_from_one() {
        let catalog = ThemeCatalog::new();

        for theme in catalog.themes() {
            for (index, page) in theme.pages.iter().enumerate() {
                let expected = u32::try_from(index + 1).unwrap();

                assert_eq!(
                    page.page_number, expected,
                    "theme {} page order is display-significant",
                    theme.id
                );
            }
        }
    }

    #[test]
    fn every_theme_opens_with_a_cover_and_closes_with_an_ending() {
        let catalog = ThemeCatalog::new();

        for theme in catalog.themes() {
            let first = theme.pages.first().unwrap();
            let last = theme.pages.last().unwrap();

            assert_eq!(first.kind, PageKind::Cover, "theme {}", theme.id);
            assert_eq!(last.kind, PageKind::Ending, "theme {}", theme.id);
            assert!(first.content.title.is_some(), "covers carry a title");
        }
    }
}
