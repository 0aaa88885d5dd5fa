//! Errors

use salvo::http::StatusError;
use tracing::error;

use storyloom_app::domain::previews::PreviewError;

pub(crate) fn into_status_error(error: PreviewError) -> StatusError {
    match error {
        PreviewError::Validation(source) => StatusError::bad_request()
            .brief("Invalid personalization")
            .detail(source.to_string()),
        PreviewError::TemplateNotFound { theme_id } => {
            StatusError::not_found().brief(format!("Book template {theme_id:?} not found"))
        }
        PreviewError::Rendering(source) => {
            error!("preview rendering failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
