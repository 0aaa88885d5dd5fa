//! Errors

use salvo::http::StatusError;
use tracing::error;

use storyloom_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Checkout(source) => StatusError::unprocessable_entity()
            .brief("Cart is not ready for checkout")
            .detail(source.to_string()),
        CartsServiceError::Store(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
