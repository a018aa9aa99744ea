//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::BasketService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Basket service for all business logic.
    pub basket_service: Arc<BasketService>,
}
