//! Storefront application services over the storyloom engine: session
//! carts, preview generation, and print-asset creation, with their external
//! collaborators behind swappable traits.

pub mod context;
pub mod domain;
