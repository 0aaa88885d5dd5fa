//! Remove Cart Item Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Removes a line from the session's cart. Removal is idempotent: deleting
/// an absent line succeeds.
#[endpoint(
    tags("carts"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item removed (or was already absent)"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.items.delete", skip(session, item, depot), err)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .remove_item(
            session.into_inner().into(),
            item.into_inner(),
            Timestamp::now(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
