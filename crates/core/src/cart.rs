//! Session cart aggregate.
//!
//! One cart per client session, mutated in place by a single writer. Derived
//! figures (totals, discounts) are never stored on the cart; see
//! [`crate::pricing`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;
use uuid::Uuid;

use crate::personalization::Personalization;

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Line identity, unique within the cart.
    pub id: Uuid,

    /// Product the line refers to.
    pub product_id: String,

    /// Variant of the product (cover type, size).
    pub variant_id: String,

    /// Number of copies; at least 1 for lines created through the aggregate.
    pub quantity: u32,

    /// Snapshot of the personalization the book will be printed with.
    pub personalization: Personalization,

    /// Unit price at the time of addition.
    pub price: Decimal,

    /// Struck-through price the unit price is compared against, when on sale.
    pub compare_at_price: Option<Decimal>,

    /// When the line first entered the cart.
    pub added_at: Timestamp,
}

impl CartItem {
    fn matches(&self, new: &NewCartItem) -> bool {
        // Two additions merge only when they would print the same book from
        // the same variant.
        self.product_id == new.product_id
            && self.variant_id == new.variant_id
            && self.personalization == new.personalization
    }
}

/// Payload for adding a line to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    /// Product to add.
    pub product_id: String,

    /// Variant of the product.
    pub variant_id: String,

    /// Copies to add.
    pub quantity: u32,

    /// Personalization the book will be printed with.
    pub personalization: Personalization,

    /// Unit price.
    pub price: Decimal,

    /// Struck-through comparison price, when on sale.
    pub compare_at_price: Option<Decimal>,
}

/// Outcome of [`Cart::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAdded {
    /// The line the addition landed on.
    pub item_id: Uuid,

    /// Whether the addition merged into an existing line instead of
    /// appending a new one.
    pub merged: bool,
}

/// The session cart.
///
/// Items keep insertion order; the storefront displays them in that order.
/// Invariant: no two lines share a (product, variant, personalization) key;
/// [`Cart::add_item`] merges such additions by incrementing quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    /// Cart identity, stable for the life of the session.
    pub id: Uuid,

    /// Lines in insertion order.
    pub items: Vec<CartItem>,

    /// ISO 4217 currency code all line prices share.
    pub currency: String,

    /// When the cart was created.
    pub created_at: Timestamp,

    /// When the cart last changed.
    pub updated_at: Timestamp,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new(id: Uuid, currency: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id,
            items: Vec::new(),
            currency: currency.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a line, merging with an existing line on a matching key.
    ///
    /// A merge increments the existing line's quantity by the new line's
    /// quantity; otherwise a new line is appended with a freshly generated
    /// id and `added_at = now`.
    pub fn add_item(&mut self, new: NewCartItem, now: Timestamp) -> ItemAdded {
        if let Some(existing) = self.items.iter_mut().find(|item| item.matches(&new)) {
            existing.quantity += new.quantity;
            let item_id = existing.id;
            self.updated_at = now;

            return ItemAdded {
                item_id,
                merged: true,
            };
        }

        let item_id = Uuid::now_v7();

        self.items.push(CartItem {
            id: item_id,
            product_id: new.product_id,
            variant_id: new.variant_id,
            quantity: new.quantity,
            personalization: new.personalization,
            price: new.price,
            compare_at_price: new.compare_at_price,
            added_at: now,
        });
        self.updated_at = now;

        ItemAdded {
            item_id,
            merged: false,
        }
    }

    /// Remove a line. Removing an absent line is a no-op, so removal is
    /// idempotent.
    pub fn remove_item(&mut self, item_id: Uuid, now: Timestamp) {
        let before = self.items.len();

        self.items.retain(|item| item.id != item_id);

        if self.items.len() != before {
            self.updated_at = now;
        }
    }

    /// Change a line's quantity.
    ///
    /// Zero and unknown lines are total no-ops: dropping a line to zero goes
    /// through [`Cart::remove_item`] explicitly, never through here.
    pub fn update_quantity(&mut self, item_id: Uuid, quantity: u32, now: Timestamp) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.quantity = quantity;
            self.updated_at = now;
        }
    }

    /// Empty the cart, preserving its identity and currency.
    pub fn clear(&mut self, now: Timestamp) {
        self.items.clear();
        self.updated_at = now;
    }

    /// Look up a line by id.
    #[must_use]
    pub fn find_item(&self, item_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// A single checkout-blocking problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutViolation {
    /// The cart holds no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A line's personalization lacks a child name.
    #[error("item {line}: child name is required")]
    MissingChildName {
        /// 1-based display position of the offending line.
        line: usize,
    },

    /// A line's quantity is zero.
    #[error("item {line}: invalid quantity")]
    InvalidQuantity {
        /// 1-based display position of the offending line.
        line: usize,
    },
}

/// Every problem blocking checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutErrors {
    violations: SmallVec<[CheckoutViolation; 4]>,
}

impl CheckoutErrors {
    /// The violations, in line order.
    #[must_use]
    pub fn violations(&self) -> &[CheckoutViolation] {
        &self.violations
    }

    /// Whether a specific violation is present.
    #[must_use]
    pub fn contains(&self, violation: CheckoutViolation) -> bool {
        self.violations.contains(&violation)
    }

    /// Number of problems found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether no problem was found. Never true for a returned error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for CheckoutErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for CheckoutErrors {}

/// Check a cart is ready for checkout.
///
/// # Errors
///
/// Returns [`CheckoutErrors`] aggregating every problem (an empty cart, and
/// per line a missing child name or a zero quantity) so the customer fixes
/// everything in one pass.
pub fn validate_for_checkout(cart: &Cart) -> Result<(), CheckoutErrors> {
    let mut violations = SmallVec::new();

    if cart.items.is_empty() {
        violations.push(CheckoutViolation::EmptyCart);
    }

    for (index, item) in cart.items.iter().enumerate() {
        let line = index + 1;

        if item.personalization.child_name.trim().is_empty() {
            violations.push(CheckoutViolation::MissingChildName { line });
        }

        if item.quantity == 0 {
            violations.push(CheckoutViolation::InvalidQuantity { line });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CheckoutErrors { violations })
    }
}
