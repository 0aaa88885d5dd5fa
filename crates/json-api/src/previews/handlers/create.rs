//! Generate Preview Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storyloom_app::domain::previews::{PreviewPage, PreviewResponse};

use crate::{
    extensions::*, previews::errors::into_status_error,
    requests::personalization::PersonalizationBody, state::State,
};

/// Generated Preview Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneratePreviewResponse {
    /// Rendered pages in reading order
    pub pages: Vec<PreviewPageBody>,

    /// Opaque identity of this generation
    pub asset_id: Uuid,

    /// When the preview stops being valid
    pub expires_at: String,
}

impl From<PreviewResponse> for GeneratePreviewResponse {
    fn from(preview: PreviewResponse) -> Self {
        Self {
            pages: preview.pages.into_iter().map(PreviewPageBody::from).collect(),
            asset_id: preview.asset_id,
            expires_at: preview.expires_at.to_string(),
        }
    }
}

/// Preview Page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewPageBody {
    /// 1-based page number
    pub page_number: u32,

    /// Full-size preview image
    pub image_url: String,

    /// Thumbnail for navigation strips
    pub thumbnail_url: String,

    /// Full-size image width, in pixels
    pub width: u32,

    /// Full-size image height, in pixels
    pub height: u32,
}

impl From<PreviewPage> for PreviewPageBody {
    fn from(page: PreviewPage) -> Self {
        Self {
            page_number: page.page_number,
            image_url: page.image_url,
            thumbnail_url: page.thumbnail_url,
            width: page.width,
            height: page.height,
        }
    }
}

/// Generate Preview Handler
#[endpoint(
    tags("previews"),
    summary = "Generate Book Preview",
    responses(
        (status_code = StatusCode::OK, description = "Preview generated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid personalization"),
        (status_code = StatusCode::NOT_FOUND, description = "Book template not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PersonalizationBody>,
    depot: &mut Depot,
) -> Result<Json<GeneratePreviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let preview = state
        .app
        .previews
        .generate(json.into_inner().into(), Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(Json(preview.into()))
}
