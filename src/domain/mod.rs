//! Domain layer: the basket and user entity types.
//!
//! The basket is the single business entity tracked by this service; it
//! moves through a simple string-typed lifecycle (`PENDING` →
//! `COMPLETED`). The user type is declared for the schema only.

pub mod basket;
pub mod user;

pub use basket::Basket;
pub use user::User;
