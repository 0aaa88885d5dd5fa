//! Shared fixtures for tests and examples.

use jiff::Timestamp;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    cart::{CartItem, NewCartItem},
    personalization::{CoverColor, Personalization},
};

/// A baseline valid personalization.
#[must_use]
pub fn personalization() -> Personalization {
    Personalization {
        child_name: "Emma".to_string(),
        cover_color: CoverColor::Blue,
        dedication: None,
        locale: "en-US".to_string(),
        theme_id: "1".to_string(),
    }
}

/// An add-item payload for the given product at a unit price and quantity.
#[must_use]
pub fn new_cart_item(product_id: &str, price: Decimal, quantity: u32) -> NewCartItem {
    NewCartItem {
        product_id: product_id.to_string(),
        variant_id: "hardcover".to_string(),
        quantity,
        personalization: personalization(),
        price,
        compare_at_price: None,
    }
}

/// A materialized cart line for the given product at a unit price and
/// quantity.
#[must_use]
pub fn cart_item(product_id: &str, price: Decimal, quantity: u32) -> CartItem {
    CartItem {
        id: Uuid::now_v7(),
        product_id: product_id.to_string(),
        variant_id: "hardcover".to_string(),
        quantity,
        personalization: personalization(),
        price,
        compare_at_price: None,
        added_at: Timestamp::UNIX_EPOCH,
    }
}
