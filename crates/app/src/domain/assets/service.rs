//! Print assets service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use storyloom::{
    personalization::Personalization,
    validation::{self, Screening, ValidationErrors},
};

/// Lifecycle state of a print asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// The asset reference exists and fulfilment can pick it up.
    Generated,
}

impl AssetStatus {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "generated",
        }
    }
}

/// Reference to a print-ready artifact for fulfilment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintAsset {
    /// Opaque asset identity.
    pub asset_id: Uuid,

    /// Where fulfilment fetches the print-ready PDF.
    pub print_ready_pdf_url: String,

    /// Lifecycle state.
    pub status: AssetStatus,

    /// When the asset was created.
    pub created_at: Timestamp,
}

/// Failures surfaced by print-asset creation.
#[derive(Debug, Error)]
pub enum PrintAssetError {
    /// The personalization broke one or more validation rules.
    #[error("invalid personalization")]
    Validation(#[source] ValidationErrors),
}

/// Print-asset creation.
#[automock]
#[async_trait]
pub trait PrintAssetsService: Send + Sync {
    /// Create a print-ready asset reference for a personalization.
    async fn create(
        &self,
        personalization: Personalization,
        now: Timestamp,
    ) -> Result<PrintAsset, PrintAssetError>;
}

/// Stand-in for the real asset pipeline.
///
/// A production implementation renders a 300 DPI CMYK PDF and uploads it to
/// object storage; this one mints the same shape of asset reference so the
/// fulfilment contract can be exercised end to end.
#[derive(Debug, Clone)]
pub struct StubPrintAssets {
    base_url: String,
    screening: Screening,
}

impl StubPrintAssets {
    /// Build the stub over the storage base URL asset references point into.
    #[must_use]
    pub fn new(base_url: impl Into<String>, screening: Screening) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            screening,
        }
    }
}

#[async_trait]
impl PrintAssetsService for StubPrintAssets {
    async fn create(
        &self,
        personalization: Personalization,
        now: Timestamp,
    ) -> Result<PrintAsset, PrintAssetError> {
        validation::validate(&personalization, &self.screening)
            .map_err(PrintAssetError::Validation)?;

        let asset_id = Uuid::now_v7();

        Ok(PrintAsset {
            asset_id,
            print_ready_pdf_url: format!("{}/print-assets/{asset_id}.pdf", self.base_url),
            status: AssetStatus::Generated,
            created_at: now,
        })
    }
}
