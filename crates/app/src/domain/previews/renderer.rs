//! Page rendering collaborator.

use std::fmt::Write as _;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use storyloom::colors::ColorScheme;

/// Full-size preview page width, in pixels.
pub const PAGE_WIDTH: u32 = 1100;

/// Full-size preview page height, in pixels.
pub const PAGE_HEIGHT: u32 = 850;

/// Thumbnail width, in pixels.
pub const THUMB_WIDTH: u32 = 150;

/// Thumbnail height, in pixels.
pub const THUMB_HEIGHT: u32 = 200;

/// Rendering input for a single page: the template's identity and
/// illustration slot, the composed display text, and the resolved palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// 1-based page number, embedded in the artwork.
    pub page_number: u32,

    /// Illustration slot from the page template.
    pub illustration: &'static str,

    /// Composed display text, already clamped to the renderer's limit.
    pub text: String,

    /// Palette for the selected cover color.
    pub scheme: ColorScheme,
}

/// Artifact URLs produced for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Full-size preview image.
    pub image_url: String,

    /// Thumbnail for page navigation strips.
    pub thumbnail_url: String,
}

/// Failure raised by a rendering backend.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    /// Wrap a backend failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Produces preview artwork for a single composed page.
///
/// Implementations are swappable without touching pipeline logic: the
/// bundled one points at a placeholder image service; a production CMYK/PDF
/// rendering service fulfils the same contract.
#[automock]
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Render one page, returning its artifact URLs.
    async fn render(&self, request: RenderRequest) -> Result<RenderedPage, RenderError>;
}

/// Placeholder-image renderer.
///
/// Builds URLs against a `via.placeholder.com`-style service: dimensions,
/// palette colors and overlay text are all encoded in the URL, so the
/// "rendering" is deterministic and instant.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    base_url: String,
}

impl PlaceholderRenderer {
    /// Point the renderer at a placeholder service.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url }
    }

    fn image_url(&self, request: &RenderRequest) -> String {
        format!(
            "{}/{}x{}/{}/{}?text=Page+{}%0A{}",
            self.base_url,
            PAGE_WIDTH,
            PAGE_HEIGHT,
            request.scheme.primary_hex(),
            request.scheme.background_hex(),
            request.page_number,
            encode_query_text(&request.text),
        )
    }

    fn thumbnail_url(&self, request: &RenderRequest) -> String {
        format!(
            "{}/{}x{}/{}/{}?text=P{}",
            self.base_url,
            THUMB_WIDTH,
            THUMB_HEIGHT,
            request.scheme.primary_hex(),
            request.scheme.background_hex(),
            request.page_number,
        )
    }
}

#[async_trait]
impl PageRenderer for PlaceholderRenderer {
    async fn render(&self, request: RenderRequest) -> Result<RenderedPage, RenderError> {
        Ok(RenderedPage {
            image_url: self.image_url(&request),
            thumbnail_url: self.thumbnail_url(&request),
        })
    }
}

/// Query-string encoding for overlay text: spaces become `+`, everything
/// outside the unreserved set is percent-encoded.
fn encode_query_text(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => encoded.push(c),
            ' ' => encoded.push('+'),
            _ => {
                let mut buffer = [0u8; 4];

                for byte in c.encode_utf8(&mut buffer).bytes() {
                    // Infallible: writing to a String.
                    _ = write!(encoded, "%{byte:02X}");
                }
            }
        }
    }

    encoded
}
