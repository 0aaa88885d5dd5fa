//! App Context

use std::sync::Arc;

use storyloom::{catalog::ThemeCatalog, pricing::PricingRules, validation::Screening};

use crate::domain::{
    assets::{PrintAssetsService, StubPrintAssets},
    carts::{CartsService, MemoryCartStore, SessionCartsService},
    previews::{PlaceholderRenderer, PreviewPipeline, PreviewService},
};

/// Collaborator endpoints and policy knobs the services are built from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the placeholder image service behind the preview
    /// renderer.
    pub renderer_base_url: String,

    /// Base URL print-ready asset references point into.
    pub asset_base_url: String,

    /// Denylist entries for content screening; empty keeps the built-in
    /// baseline list.
    pub denylist: Vec<String>,
}

/// Shared handles to every domain service.
#[derive(Clone)]
pub struct AppContext {
    /// Session cart operations.
    pub carts: Arc<dyn CartsService>,

    /// Preview generation.
    pub previews: Arc<dyn PreviewService>,

    /// Print-asset creation.
    pub print_assets: Arc<dyn PrintAssetsService>,
}

impl AppContext {
    /// Wire the production services from configuration.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let screening = if config.denylist.is_empty() {
            Screening::default()
        } else {
            Screening::new(config.denylist)
        };

        let renderer = Arc::new(PlaceholderRenderer::new(config.renderer_base_url));

        Self {
            carts: Arc::new(SessionCartsService::new(
                Arc::new(MemoryCartStore::default()),
                PricingRules::default(),
            )),
            previews: Arc::new(PreviewPipeline::new(
                ThemeCatalog::new(),
                screening.clone(),
                renderer,
            )),
            print_assets: Arc::new(StubPrintAssets::new(config.asset_base_url, screening)),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;
    use uuid::Uuid;

    use storyloom::fixtures;

    use crate::domain::carts::SessionId;

    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            renderer_base_url: "https://via.placeholder.com".to_string(),
            asset_base_url: "https://storage.example.com".to_string(),
            denylist: Vec::new(),
        }
    }

    #[tokio::test]
    async fn wired_context_serves_previews_and_carts() -> TestResult {
        let app = AppContext::from_config(config());

        let preview = app
            .previews
            .generate(fixtures::personalization(), Timestamp::UNIX_EPOCH)
            .await?;

        assert_eq!(preview.pages.len(), 5);

        let view = app
            .carts
            .get_cart(SessionId::from_uuid(Uuid::now_v7()), Timestamp::UNIX_EPOCH)
            .await?;

        assert!(view.cart.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn configured_denylist_reaches_the_pipeline() {
        let mut config = config();
        config.denylist = vec!["kraken".to_string()];

        let app = AppContext::from_config(config);

        let mut input = fixtures::personalization();
        input.dedication = Some("Beware the Kraken".to_string());

        let result = app
            .previews
            .generate(input, Timestamp::UNIX_EPOCH)
            .await;

        assert!(result.is_err(), "configured entry should screen the text");
    }
}
