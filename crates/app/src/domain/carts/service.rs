//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::broadcast;
use uuid::Uuid;

use storyloom::{
    cart::{self, Cart, NewCartItem},
    pricing::{self, CartTotals, PricingRules},
};

use crate::domain::carts::{
    errors::CartsServiceError,
    events::CartEvent,
    store::{CartStore, SessionId},
};

/// Currency new carts are denominated in.
const DEFAULT_CURRENCY: &str = "USD";

/// Buffered cart events per subscriber before lagging.
const EVENT_CAPACITY: usize = 16;

/// A cart together with its derived totals, as consumers read it.
///
/// Totals are computed from the same snapshot of the items the cart itself
/// carries, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct CartView {
    /// The cart state.
    pub cart: Cart,

    /// Figures derived from the cart's items.
    pub totals: CartTotals,
}

/// Result of adding a line: which line it landed on and the refreshed view.
#[derive(Debug, Clone)]
pub struct ItemAddedView {
    /// The line the addition landed on.
    pub item_id: Uuid,

    /// Whether the addition merged into an existing line.
    pub merged: bool,

    /// The cart after the addition.
    pub view: CartView,
}

/// Session-scoped cart operations.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Read the session's cart with derived totals, creating an empty cart
    /// on first touch.
    async fn get_cart(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError>;

    /// Add a line, merging with an existing line on a matching dedup key.
    /// Publishes [`CartEvent::ItemAdded`].
    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
        now: Timestamp,
    ) -> Result<ItemAddedView, CartsServiceError>;

    /// Remove a line; removing an absent line is a no-op.
    async fn remove_item(
        &self,
        session: SessionId,
        item: Uuid,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError>;

    /// Change a line's quantity; zero and unknown lines are no-ops.
    async fn update_quantity(
        &self,
        session: SessionId,
        item: Uuid,
        quantity: u32,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError>;

    /// Empty the cart, keeping its identity and currency.
    async fn clear(&self, session: SessionId, now: Timestamp)
    -> Result<CartView, CartsServiceError>;

    /// Check the cart is ready for checkout, reporting every violation.
    async fn validate_checkout(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<(), CartsServiceError>;
}

/// Carts service over an injected persistence collaborator.
///
/// One client context mutates a session's cart at a time; each operation
/// loads a snapshot, mutates it through the aggregate, and saves it back;
/// last write wins.
#[derive(Clone)]
pub struct SessionCartsService {
    store: Arc<dyn CartStore>,
    rules: PricingRules,
    events: broadcast::Sender<CartEvent>,
}

impl SessionCartsService {
    /// Build the service over a cart store and pricing rules.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, rules: PricingRules) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            store,
            rules,
            events,
        }
    }

    /// Subscribe to cart notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    async fn load_or_new(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<Cart, CartsServiceError> {
        Ok(match self.store.load(session).await? {
            Some(cart) => cart,
            None => Cart::new(Uuid::now_v7(), DEFAULT_CURRENCY, now),
        })
    }

    fn view(&self, cart: Cart) -> CartView {
        let totals = pricing::totals(&self.rules, &cart.items);

        CartView { cart, totals }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn get_cart(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError> {
        let cart = match self.store.load(session).await? {
            Some(cart) => cart,
            None => {
                // First touch: persist the fresh cart so its identity is
                // stable across reads.
                let cart = Cart::new(Uuid::now_v7(), DEFAULT_CURRENCY, now);

                self.store.save(session, &cart).await?;

                cart
            }
        };

        Ok(self.view(cart))
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
        now: Timestamp,
    ) -> Result<ItemAddedView, CartsServiceError> {
        let mut cart = self.load_or_new(session, now).await?;

        let added = cart.add_item(item, now);

        self.store.save(session, &cart).await?;

        // Nobody listening is fine; the drawer only opens when a UI is
        // subscribed.
        _ = self.events.send(CartEvent::ItemAdded {
            session,
            item: added.item_id,
        });

        Ok(ItemAddedView {
            item_id: added.item_id,
            merged: added.merged,
            view: self.view(cart),
        })
    }

    async fn remove_item(
        &self,
        session: SessionId,
        item: Uuid,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError> {
        let mut cart = self.load_or_new(session, now).await?;

        cart.remove_item(item, now);

        self.store.save(session, &cart).await?;

        Ok(self.view(cart))
    }

    async fn update_quantity(
        &self,
        session: SessionId,
        item: Uuid,
        quantity: u32,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError> {
        let mut cart = self.load_or_new(session, now).await?;

        cart.update_quantity(item, quantity, now);

        self.store.save(session, &cart).await?;

        Ok(self.view(cart))
    }

    async fn clear(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<CartView, CartsServiceError> {
        let mut cart = self.load_or_new(session, now).await?;

        cart.clear(now);

        self.store.save(session, &cart).await?;

        Ok(self.view(cart))
    }

    async fn validate_checkout(
        &self,
        session: SessionId,
        now: Timestamp,
    ) -> Result<(), CartsServiceError> {
        let cart = self.load_or_new(session, now).await?;

        cart::validate_for_checkout(&cart).map_err(CartsServiceError::Checkout)
    }
}
