//! # basket-service
//!
//! REST API for a "Basket" resource backed by a SQLite persistence layer.
//!
//! The service exposes five CRUD endpoints over a single `baskets` table
//! plus a declared-but-unused `users` table. Each request performs at most
//! one store operation; the lifecycle rules (server-assigned `PENDING`
//! state, completed-basket guard, payload bounds) live in the service
//! layer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BasketService (service/)
//!     │
//!     └── SqliteStore (persistence/) — SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
