//! Basket service: lifecycle rules on top of the persistence gateway.

use chrono::Utc;

use crate::domain::Basket;
use crate::domain::basket::{DATA_MAX_CHARS, STATE_PENDING};
use crate::error::ServiceError;
use crate::persistence::SqliteStore;

/// Orchestration layer for all basket operations.
///
/// Stateless coordinator: owns the [`SqliteStore`] and applies the
/// lifecycle rules. Every mutation follows the pattern: load row →
/// validate → merge → write back.
#[derive(Debug, Clone)]
pub struct BasketService {
    store: SqliteStore,
}

impl BasketService {
    /// Creates a new `BasketService` over the given store.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Returns all baskets, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn list_baskets(&self) -> Result<Vec<Basket>, ServiceError> {
        self.store.list_baskets().await
    }

    /// Creates a new basket in the `PENDING` state.
    ///
    /// The state is always server-assigned; any client-supplied state is
    /// discarded before this method is reached. `user_id` stays 0 until
    /// an authentication layer exists.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when `data` exceeds the
    /// payload bound, or a persistence error on database failure.
    pub async fn create_basket(&self, data: String) -> Result<Basket, ServiceError> {
        validate_data(&data)?;

        let basket = self
            .store
            .insert_basket(&data, STATE_PENDING, 0, Utc::now())
            .await?;

        tracing::info!(basket_id = basket.id, "basket created");
        Ok(basket)
    }

    /// Fetches a single basket by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BasketNotFound`] when no row matches, or a
    /// persistence error on database failure.
    pub async fn get_basket(&self, id: i64) -> Result<Basket, ServiceError> {
        self.store
            .find_basket(id)
            .await?
            .ok_or(ServiceError::BasketNotFound(id))
    }

    /// Merges `data` and `state` into an existing basket.
    ///
    /// Only fields present in the request are merged; everything else on
    /// the row is untouched apart from `updated_at`. The completed-basket
    /// guard rejects the update before anything is persisted when either
    /// the stored row is already `COMPLETED` or the merge would make it so.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BasketNotFound`] for a missing row,
    /// [`ServiceError::CompletedBasket`] when the guard trips, or
    /// [`ServiceError::InvalidRequest`] for an oversized payload.
    pub async fn update_basket(
        &self,
        id: i64,
        data: Option<String>,
        state: Option<String>,
    ) -> Result<Basket, ServiceError> {
        let mut basket = self.get_basket(id).await?;

        if basket.is_completed() {
            return Err(ServiceError::CompletedBasket(id));
        }

        if let Some(data) = data {
            validate_data(&data)?;
            basket.data = data;
        }
        if let Some(state) = state {
            basket.state = state;
        }

        // The update path may not complete a basket either.
        if basket.is_completed() {
            return Err(ServiceError::CompletedBasket(id));
        }

        basket.updated_at = Utc::now();
        if !self.store.update_basket(&basket).await? {
            return Err(ServiceError::BasketNotFound(id));
        }

        tracing::info!(basket_id = id, state = %basket.state, "basket updated");
        Ok(basket)
    }

    /// Physically removes a basket row.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::BasketNotFound`] when no row matches, or a
    /// persistence error on database failure.
    pub async fn delete_basket(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.delete_basket(id).await? {
            return Err(ServiceError::BasketNotFound(id));
        }
        tracing::info!(basket_id = id, "basket deleted");
        Ok(())
    }
}

/// Rejects payloads longer than [`DATA_MAX_CHARS`] characters.
fn validate_data(data: &str) -> Result<(), ServiceError> {
    let len = data.chars().count();
    if len > DATA_MAX_CHARS {
        return Err(ServiceError::InvalidRequest(format!(
            "data exceeds {DATA_MAX_CHARS} characters (got {len})"
        )));
    }
    Ok(())
}
