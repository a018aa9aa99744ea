//! Basket DTOs for create, update, and delete operations.
//!
//! Request bodies are explicit DTOs rather than the persisted entity, so
//! client-supplied `id`, timestamps, or `user_id` can never leak into a
//! row. Unknown fields (including `state` on create) are ignored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /basket`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBasketRequest {
    /// Opaque payload, at most 2048 characters.
    pub data: String,
}

/// Request body for `PATCH /basket/{id}`.
///
/// Only fields present in the body are merged into the stored row.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBasketRequest {
    /// Replacement payload, at most 2048 characters.
    #[serde(default)]
    pub data: Option<String>,
    /// Replacement lifecycle state.
    #[serde(default)]
    pub state: Option<String>,
}

/// Response body for `DELETE /basket/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteBasketResponse {
    /// Confirmation message.
    pub message: String,
}
