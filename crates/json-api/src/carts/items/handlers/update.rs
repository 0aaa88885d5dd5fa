//! Update Cart Item Quantity Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// The new quantity. Zero is a no-op: lines are dropped through the
    /// remove endpoint, never through a quantity change.
    pub quantity: u32,
}

/// Update Cart Item Quantity Handler
///
/// Replaces a line's quantity. Zero and unknown lines leave the cart
/// unchanged.
#[endpoint(
    tags("carts"),
    summary = "Update Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart after the change"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    item: PathParam<Uuid>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let view = state
        .app
        .carts
        .update_quantity(
            session.into_inner().into(),
            item.into_inner(),
            json.into_inner().quantity,
            Timestamp::now(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
