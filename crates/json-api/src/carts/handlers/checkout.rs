//! Checkout Validation Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Checkout Validation Handler
///
/// Checks the session's cart is ready for checkout. Every violation is
/// reported in one response so the customer can fix everything at once.
#[endpoint(
    tags("carts"),
    summary = "Validate Cart for Checkout",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart is ready for checkout"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart is not ready for checkout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .validate_checkout(session.into_inner().into(), Timestamp::now())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::TestClient;
    use testresult::TestResult;
    use uuid::Uuid;

    use storyloom::cart::{self, Cart};
    use storyloom_app::domain::carts::{CartsServiceError, MockCartsService, SessionId};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{session}/checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_ready_cart_returns_204() -> TestResult {
        let session = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_validate_checkout()
            .once()
            .withf(move |s, _| *s == SessionId::from_uuid(session))
            .return_once(|_, _| Ok(()));

        let res = TestClient::post(format!("http://example.com/carts/{session}/checkout"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_returns_422() -> TestResult {
        let session = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts.expect_validate_checkout().once().return_once(|_, _| {
            let empty = Cart::new(Uuid::now_v7(), "USD", Timestamp::UNIX_EPOCH);

            Err(CartsServiceError::Checkout(
                cart::validate_for_checkout(&empty).expect_err("empty cart should fail"),
            ))
        });

        let res = TestClient::post(format!("http://example.com/carts/{session}/checkout"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }
}
