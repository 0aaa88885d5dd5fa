//! Add Cart Item Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storyloom::cart::NewCartItem;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    requests::personalization::PersonalizationBody,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,

    /// Variant of the product
    pub variant_id: String,

    /// Copies to add
    pub quantity: u32,

    /// Personalization the book will be printed with
    pub personalization: PersonalizationBody,

    /// Unit price, as a decimal string
    pub price: String,

    /// Struck-through comparison price, when on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
}

impl AddCartItemRequest {
    fn into_new_item(self) -> Result<NewCartItem, StatusError> {
        let price = parse_amount(&self.price)?;
        let compare_at_price = self
            .compare_at_price
            .as_deref()
            .map(parse_amount)
            .transpose()?;

        Ok(NewCartItem {
            product_id: self.product_id,
            variant_id: self.variant_id,
            quantity: self.quantity,
            personalization: self.personalization.into(),
            price,
            compare_at_price,
        })
    }
}

fn parse_amount(value: &str) -> Result<Decimal, StatusError> {
    value
        .parse()
        .map_err(|_invalid| StatusError::bad_request().brief(format!("Invalid amount {value:?}")))
}

/// Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemAddedResponse {
    /// The line the addition landed on
    pub item_id: Uuid,

    /// Whether the addition merged into an existing line
    pub merged: bool,

    /// The cart after the addition
    pub cart: CartResponse,
}

/// Add Cart Item Handler
///
/// Adds a line to the session's cart. Two additions with the same product,
/// variant, and personalization merge into one line with a summed quantity.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemAddedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = session.into_inner();
    let item = json.into_inner().into_new_item()?;

    let added = state
        .app
        .carts
        .add_item(session.into(), item, Timestamp::now())
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/carts/{session}/items/{}", added.item_id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(ItemAddedResponse {
        item_id: added.item_id,
        merged: added.merged,
        cart: added.view.into(),
    }))
}
