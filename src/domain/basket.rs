//! Basket entity and lifecycle state constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of the basket `data` payload in characters.
pub const DATA_MAX_CHARS: usize = 2048;

/// Initial state assigned to every basket at creation.
pub const STATE_PENDING: &str = "PENDING";

/// Terminal state. A completed basket accepts no further updates.
pub const STATE_COMPLETED: &str = "COMPLETED";

/// A basket row from the `baskets` table.
///
/// The `state` field is a free-form status string rather than an enum;
/// the service recognizes [`STATE_PENDING`] and [`STATE_COMPLETED`] but
/// persists whatever string the update path accepts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Basket {
    /// Auto-increment row ID, assigned by the store on insert.
    pub id: i64,

    /// Creation timestamp (immutable after insert).
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,

    /// Caller-supplied payload, at most [`DATA_MAX_CHARS`] characters.
    pub data: String,

    /// Lifecycle status string.
    pub state: String,

    /// Owning user reference. No handler populates this; it stays 0.
    pub user_id: i64,
}

impl Basket {
    /// Returns `true` if the basket has reached the terminal state.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == STATE_COMPLETED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_state_is_terminal() {
        let basket = Basket {
            id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            data: String::new(),
            state: STATE_COMPLETED.to_string(),
            user_id: 0,
        };
        assert!(basket.is_completed());
    }

    #[test]
    fn pending_state_is_not_terminal() {
        let basket = Basket {
            id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            data: String::new(),
            state: STATE_PENDING.to_string(),
            user_id: 0,
        };
        assert!(!basket.is_completed());
    }
}
