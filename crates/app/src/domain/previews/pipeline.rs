//! Preview pipeline.
//!
//! Orchestrates validation, catalog lookup, color resolution, per-page text
//! composition, and rendering into a paginated preview response.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::warn;
use uuid::Uuid;

use storyloom::{
    catalog::ThemeCatalog,
    colors, compose,
    personalization::Personalization,
    validation::{self, Screening},
};

use crate::domain::previews::{
    errors::PreviewError,
    renderer::{PAGE_HEIGHT, PAGE_WIDTH, PageRenderer, RenderRequest},
};

/// How long a generated preview stays valid.
///
/// Nothing enforces the expiry beyond the response field itself; consumers
/// must check it before reusing a cached response.
pub const PREVIEW_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Soft latency target for end-to-end generation. Exceeding it is logged,
/// not enforced.
const GENERATION_TARGET: SignedDuration = SignedDuration::from_secs(3);

/// One rendered page of a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPage {
    /// 1-based page number; matches the page's position in the response.
    pub page_number: u32,

    /// Full-size preview image.
    pub image_url: String,

    /// Thumbnail for navigation strips.
    pub thumbnail_url: String,

    /// Full-size image width, in pixels.
    pub width: u32,

    /// Full-size image height, in pixels.
    pub height: u32,
}

/// A complete generated preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResponse {
    /// Pages in template order; length equals the theme's page count.
    pub pages: Vec<PreviewPage>,

    /// Opaque identity of this generation.
    pub asset_id: Uuid,

    /// When the preview stops being valid.
    pub expires_at: Timestamp,
}

/// Preview generation.
#[automock]
#[async_trait]
pub trait PreviewService: Send + Sync {
    /// Generate a paginated preview for a personalization.
    async fn generate(
        &self,
        personalization: Personalization,
        now: Timestamp,
    ) -> Result<PreviewResponse, PreviewError>;
}

/// The production pipeline over a rendering collaborator.
pub struct PreviewPipeline {
    catalog: ThemeCatalog,
    screening: Screening,
    renderer: Arc<dyn PageRenderer>,
}

impl PreviewPipeline {
    /// Build the pipeline.
    #[must_use]
    pub fn new(catalog: ThemeCatalog, screening: Screening, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            catalog,
            screening,
            renderer,
        }
    }
}

#[async_trait]
impl PreviewService for PreviewPipeline {
    async fn generate(
        &self,
        personalization: Personalization,
        now: Timestamp,
    ) -> Result<PreviewResponse, PreviewError> {
        validation::validate(&personalization, &self.screening).map_err(PreviewError::Validation)?;

        let theme = self
            .catalog
            .get(&personalization.theme_id)
            .ok_or_else(|| PreviewError::TemplateNotFound {
                theme_id: personalization.theme_id.clone(),
            })?;

        let scheme = colors::scheme(personalization.cover_color);

        // Pages render concurrently; try_join_all is an indexed join, so the
        // output order follows the template order no matter which render
        // finishes first. One failed page fails the whole request; there is
        // no partial preview.
        let renders = theme.pages.iter().map(|page| {
            self.renderer.render(RenderRequest {
                page_number: page.page_number,
                illustration: page.content.illustration,
                text: compose::page_text(page, &personalization.child_name),
                scheme,
            })
        });

        let rendered = try_join_all(renders)
            .await
            .map_err(PreviewError::Rendering)?;

        let pages = theme
            .pages
            .iter()
            .zip(rendered)
            .map(|(page, artwork)| PreviewPage {
                page_number: page.page_number,
                image_url: artwork.image_url,
                thumbnail_url: artwork.thumbnail_url,
                width: PAGE_WIDTH,
                height: PAGE_HEIGHT,
            })
            .collect();

        let elapsed = Timestamp::now().duration_since(now);

        if elapsed > GENERATION_TARGET {
            warn!("preview generation took {elapsed:#}, over the {GENERATION_TARGET:#} target");
        }

        Ok(PreviewResponse {
            pages,
            asset_id: Uuid::now_v7(),
            expires_at: now
                .saturating_add(PREVIEW_TTL)
                .expect("PREVIEW_TTL is a fixed hours-based duration and cannot fail span arithmetic"),
        })
    }
}

/// Deterministic cache key for a personalization.
///
/// Previews for the same theme/name/color/locale combination are identical
/// until they expire, so consumers may key caches on this. The key is the
/// combined input reduced to characters safe in a cache path segment.
#[must_use]
pub fn cache_key(personalization: &Personalization) -> String {
    format!(
        "{}-{}-{}-{}",
        personalization.theme_id,
        personalization.child_name,
        personalization.cover_color.as_str(),
        personalization.locale,
    )
    .chars()
    .filter(char::is_ascii_alphanumeric)
    .collect()
}
