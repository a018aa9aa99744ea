//! User account record.
//!
//! The `users` table is part of the declared schema but no handler reads
//! or writes it; it exists for a future authentication layer. If that
//! layer is ever added, `password_hash` must hold a salted cryptographic
//! hash, never a plaintext password.

use serde::{Deserialize, Serialize};

/// A user row from the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Auto-increment row ID.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Salted password hash. Never a plaintext password.
    pub password_hash: String,
}
