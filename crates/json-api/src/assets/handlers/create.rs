//! Create Print Asset Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storyloom_app::domain::assets::PrintAsset;

use crate::{
    assets::errors::into_status_error, extensions::*,
    requests::personalization::PersonalizationBody, state::State,
};

/// Print Asset Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PrintAssetResponse {
    /// Opaque asset identity
    pub asset_id: Uuid,

    /// Where fulfilment fetches the print-ready PDF
    pub print_ready_pdf_url: String,

    /// Lifecycle state of the asset
    pub status: String,

    /// When the asset was created
    pub created_at: String,
}

impl From<PrintAsset> for PrintAssetResponse {
    fn from(asset: PrintAsset) -> Self {
        Self {
            asset_id: asset.asset_id,
            print_ready_pdf_url: asset.print_ready_pdf_url,
            status: asset.status.as_str().to_string(),
            created_at: asset.created_at.to_string(),
        }
    }
}

/// Create Print Asset Handler
#[endpoint(
    tags("assets"),
    summary = "Create Print-Ready Asset",
    responses(
        (status_code = StatusCode::OK, description = "Asset created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid personalization"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PersonalizationBody>,
    depot: &mut Depot,
) -> Result<Json<PrintAssetResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let asset = state
        .app
        .print_assets
        .create(json.into_inner().into(), Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(asset.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storyloom::validation::{self, Screening};
    use storyloom_app::domain::assets::{AssetStatus, MockPrintAssetsService, PrintAssetError};

    use crate::test_helpers::assets_service;

    use super::*;

    fn make_service(assets: MockPrintAssetsService) -> Service {
        assets_service(assets, Router::with_path("order-asset").post(handler))
    }

    #[tokio::test]
    async fn test_create_asset_returns_reference() -> TestResult {
        let asset_id = Uuid::now_v7();

        let mut assets = MockPrintAssetsService::new();

        assets
            .expect_create()
            .once()
            .withf(|personalization, _| personalization.child_name == "Emma")
            .return_once(move |_, now| {
                Ok(PrintAsset {
                    asset_id,
                    print_ready_pdf_url: format!(
                        "https://storage.example.com/print-assets/{asset_id}.pdf"
                    ),
                    status: AssetStatus::Generated,
                    created_at: now,
                })
            });

        let mut res = TestClient::post("http://example.com/order-asset")
            .json(&json!({
                "childName": "Emma",
                "coverColor": "pink",
                "locale": "en-US",
                "themeId": "2",
            }))
            .send(&make_service(assets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: PrintAssetResponse = res.take_json().await?;

        assert_eq!(response.asset_id, asset_id);
        assert_eq!(response.status, "generated");
        assert!(response.print_ready_pdf_url.ends_with(&format!("{asset_id}.pdf")));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_personalization_returns_400() -> TestResult {
        let mut assets = MockPrintAssetsService::new();

        assets.expect_create().once().return_once(|input, _| {
            Err(PrintAssetError::Validation(
                validation::validate(&input, &Screening::default())
                    .expect_err("input should be invalid"),
            ))
        });

        let res = TestClient::post("http://example.com/order-asset")
            .json(&json!({
                "childName": "Emma!!",
                "coverColor": "pink",
                "locale": "en-US",
                "themeId": "2",
            }))
            .send(&make_service(assets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
