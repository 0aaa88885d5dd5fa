//! Cart notifications.

use uuid::Uuid;

use crate::domain::carts::SessionId;

/// Notification published when a cart mutation should be visible to a UI
/// layer.
///
/// The storefront opens its cart drawer whenever an item lands in the cart;
/// that used to be a flag flipped inside the add operation itself. It is an
/// event instead, so domain mutations stay free of UI concerns and any
/// number of subscribers can react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// An item landed in the cart, whether merged or appended.
    ItemAdded {
        /// Session whose cart changed.
        session: SessionId,

        /// The line the addition landed on.
        item: Uuid,
    },
}
