//! Session carts.

pub mod errors;
pub mod events;
pub mod service;
pub mod store;

pub use errors::CartsServiceError;
pub use events::CartEvent;
pub use service::*;
pub use store::*;
