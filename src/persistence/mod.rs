//! Persistence layer: SQLite-backed store for baskets and users.

pub mod sqlite;

pub use sqlite::SqliteStore;
