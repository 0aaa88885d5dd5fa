//! Cart persistence collaborator.
//!
//! Carts survive page reloads through whatever backend sits behind
//! [`CartStore`]: the bundled implementation is in-process, a production
//! deployment points the same trait at a session KV service. Last write
//! wins; no transactional guarantee beyond that.

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use storyloom::cart::Cart;

/// Identity of the client session that owns a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Wrap a raw session UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The raw session UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Failure raised by a [`CartStore`] backend.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CartStoreError {
    message: String,
}

impl CartStoreError {
    /// Wrap a backend failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Durable storage of one cart per session.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the cart owned by a session, if one has been saved.
    async fn load(&self, session: SessionId) -> Result<Option<Cart>, CartStoreError>;

    /// Persist the session's cart, replacing any previous snapshot.
    async fn save(&self, session: SessionId, cart: &Cart) -> Result<(), CartStoreError>;

    /// Drop the session's cart entirely.
    async fn delete(&self, session: SessionId) -> Result<(), CartStoreError>;
}

/// In-process store: one cart per session, last write wins.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    carts: RwLock<FxHashMap<SessionId, Cart>>,
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn load(&self, session: SessionId) -> Result<Option<Cart>, CartStoreError> {
        Ok(self.carts.read().await.get(&session).cloned())
    }

    async fn save(&self, session: SessionId, cart: &Cart) -> Result<(), CartStoreError> {
        self.carts.write().await.insert(session, cart.clone());

        Ok(())
    }

    async fn delete(&self, session: SessionId) -> Result<(), CartStoreError> {
        self.carts.write().await.remove(&session);

        Ok(())
    }
}
