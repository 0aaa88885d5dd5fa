//! Errors

use salvo::http::StatusError;

use storyloom_app::domain::assets::PrintAssetError;

pub(crate) fn into_status_error(error: PrintAssetError) -> StatusError {
    match error {
        PrintAssetError::Validation(source) => StatusError::bad_request()
            .brief("Invalid personalization")
            .detail(source.to_string()),
    }
}
