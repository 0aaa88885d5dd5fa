//! Page text composition.
//!
//! Turns a page template plus the child's name into the display text handed
//! to the preview renderer. Cover pages compose from title/subtitle; story
//! and ending pages join their text fragments around the interpolated name.

use crate::catalog::{PageContent, PageKind, PageTemplate};

/// Longest composed text handed to the renderer, in characters.
///
/// The renderer overlays the text on fixed-size artwork; anything longer
/// would not fit its display area.
pub const PREVIEW_TEXT_LIMIT: usize = 80;

/// Compose the display text for one page.
#[must_use]
pub fn page_text(page: &PageTemplate, child_name: &str) -> String {
    let text = match page.kind {
        PageKind::Cover => cover_text(&page.content, child_name),
        PageKind::Story | PageKind::Ending => body_text(&page.content, child_name),
    };

    clamp_chars(text, PREVIEW_TEXT_LIMIT)
}

/// Cover composition takes precedence over body fragments: a cover with an
/// interpolation point reads "title name"; otherwise "title subtitle".
fn cover_text(content: &PageContent, child_name: &str) -> String {
    if content.interpolate_name {
        if let Some(title) = content.title {
            return join_parts(&[Some(title), Some(child_name)]);
        }
    }

    join_parts(&[content.title, content.subtitle])
}

fn body_text(content: &PageContent, child_name: &str) -> String {
    let name = content.interpolate_name.then_some(child_name);

    join_parts(&[content.lead, name, content.tail])
}

fn join_parts(parts: &[Option<&str>]) -> String {
    let mut text = String::new();

    for part in parts.iter().flatten() {
        if !text.is_empty() {
            text.push(' ');
        }

        text.push_str(part);
    }

    text
}

fn clamp_chars(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        text
    } else {
        text.chars().take(limit).collect()
    }
}
