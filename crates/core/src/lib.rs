//! Storyloom
//!
//! Storyloom is the pricing and personalization engine behind a storefront for
//! personalized children's books. It owns the two parts of the storefront with
//! real business rules: the session cart with its derived totals and
//! promotional discounts, and the deterministic mapping from a customer's
//! personalization onto paginated book templates.
//!
//! Everything in this crate is pure and synchronous. Collaborators with side
//! effects (rendering, persistence) live behind service traits in
//! `storyloom-app`.

pub mod cart;
pub mod catalog;
pub mod colors;
pub mod compose;
pub mod fixtures;
pub mod personalization;
pub mod pricing;
pub mod validation;
