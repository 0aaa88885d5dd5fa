//! Carts service errors.

use thiserror::Error;

use storyloom::cart::CheckoutErrors;

use crate::domain::carts::store::CartStoreError;

/// Failures surfaced by the carts service.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The cart is not ready for checkout; carries every violation.
    #[error("cart is not ready for checkout")]
    Checkout(#[source] CheckoutErrors),

    /// The persistence collaborator failed.
    #[error("cart storage error")]
    Store(#[from] CartStoreError),
}
