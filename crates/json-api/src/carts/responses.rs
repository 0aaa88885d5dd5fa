//! Cart response payloads.
//!
//! Monetary amounts are serialized as decimal strings (`"29.99"`) so totals
//! survive the wire without float rounding.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storyloom::{cart::CartItem, pricing::Discount};
use storyloom_app::domain::carts::CartView;

use crate::requests::personalization::PersonalizationBody;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: Uuid,

    /// The lines in the cart, in display order
    pub items: Vec<CartItemBody>,

    /// ISO 4217 currency code
    pub currency: String,

    /// Sum of unit price × quantity over all lines
    pub subtotal: String,

    /// Flat-rate tax on the subtotal
    pub tax: String,

    /// Tiered shipping charge
    pub shipping: String,

    /// Subtotal plus tax plus shipping
    pub total: String,

    /// Total quantity across all lines
    pub item_count: u32,

    /// Applicable promotional discounts
    pub discounts: Vec<DiscountBody>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            id: view.cart.id,
            items: view.cart.items.into_iter().map(CartItemBody::from).collect(),
            currency: view.cart.currency,
            subtotal: view.totals.subtotal.to_string(),
            tax: view.totals.tax.to_string(),
            shipping: view.totals.shipping.to_string(),
            total: view.totals.total.to_string(),
            item_count: view.totals.item_count,
            discounts: view.totals.discounts.into_iter().map(DiscountBody::from).collect(),
            created_at: view.cart.created_at.to_string(),
            updated_at: view.cart.updated_at.to_string(),
        }
    }
}

/// Cart Item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemBody {
    /// The unique identifier of the line
    pub id: Uuid,

    /// Product the line refers to
    pub product_id: String,

    /// Variant of the product
    pub variant_id: String,

    /// Number of copies
    pub quantity: u32,

    /// Personalization the book will be printed with
    pub personalization: PersonalizationBody,

    /// Unit price
    pub price: String,

    /// Struck-through comparison price, when on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// When the line first entered the cart
    pub added_at: String,
}

impl From<CartItem> for CartItemBody {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            variant_id: item.variant_id,
            quantity: item.quantity,
            personalization: item.personalization.into(),
            price: item.price.to_string(),
            compare_at_price: item.compare_at_price.map(|price| price.to_string()),
            added_at: item.added_at.to_string(),
        }
    }
}

/// Promotional Discount
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiscountBody {
    /// Discount kind
    #[serde(rename = "type")]
    pub kind: String,

    /// Monetary value of the discount
    pub value: String,

    /// Customer-facing description
    pub description: String,
}

impl From<Discount> for DiscountBody {
    fn from(discount: Discount) -> Self {
        let kind = match discount {
            Discount::FreeShipping { .. } => "free_shipping",
            Discount::Bulk { .. } => "bulk_discount",
        };

        Self {
            kind: kind.to_string(),
            value: discount.value().to_string(),
            description: discount.description().to_string(),
        }
    }
}
