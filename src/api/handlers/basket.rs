//! Basket CRUD handlers: list, create, get, update, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateBasketRequest, DeleteBasketResponse, UpdateBasketRequest};
use crate::app_state::AppState;
use crate::domain::Basket;
use crate::error::{ErrorResponse, ServiceError};

/// `GET /basket` — List all baskets.
///
/// # Errors
///
/// Returns [`ServiceError`] on persistence failure.
#[utoipa::path(
    get,
    path = "/basket",
    tag = "Baskets",
    summary = "List all baskets",
    description = "Returns every basket row, oldest first. The array may be empty.",
    responses(
        (status = 200, description = "All baskets", body = Vec<Basket>),
    )
)]
pub async fn list_baskets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let baskets = state.basket_service.list_baskets().await?;
    Ok(Json(baskets))
}

/// `POST /basket` — Create a basket.
///
/// The new basket always starts in the `PENDING` state; a `state` field
/// in the request body is ignored.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed or oversized body.
#[utoipa::path(
    post,
    path = "/basket",
    tag = "Baskets",
    summary = "Create a basket",
    description = "Creates a basket with the given payload. The ID, timestamps, and state are server-assigned; the state is always PENDING.",
    request_body = CreateBasketRequest,
    responses(
        (status = 200, description = "Basket created", body = Basket),
        (status = 400, description = "Malformed or oversized body", body = ErrorResponse),
    )
)]
pub async fn create_basket(
    State(state): State<AppState>,
    body: Result<Json<CreateBasketRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = body.map_err(|e| ServiceError::InvalidRequest(e.body_text()))?;
    let basket = state.basket_service.create_basket(req.data).await?;
    Ok(Json(basket))
}

/// `GET /basket/{id}` — Get a single basket.
///
/// # Errors
///
/// Returns [`ServiceError::BasketNotFound`] if no row matches.
#[utoipa::path(
    get,
    path = "/basket/{id}",
    tag = "Baskets",
    summary = "Get a basket",
    description = "Returns the basket with the given ID.",
    params(
        ("id" = i64, Path, description = "Basket ID"),
    ),
    responses(
        (status = 200, description = "Basket found", body = Basket),
        (status = 404, description = "Basket not found", body = ErrorResponse),
    )
)]
pub async fn get_basket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    let basket = state.basket_service.get_basket(id).await?;
    Ok(Json(basket))
}

/// `PATCH /basket/{id}` — Update a basket's payload and state.
///
/// Only `data` and `state` are merged from the body; `updated_at` is
/// refreshed. Completed baskets reject all updates, and no update may set
/// the state to `COMPLETED`.
///
/// # Errors
///
/// Returns [`ServiceError`] on a missing row, a tripped completed-basket
/// guard, or a malformed body.
#[utoipa::path(
    patch,
    path = "/basket/{id}",
    tag = "Baskets",
    summary = "Update a basket",
    description = "Merges the provided fields into the stored basket. Rejected when the basket is already completed or the merge would complete it.",
    params(
        ("id" = i64, Path, description = "Basket ID"),
    ),
    request_body = UpdateBasketRequest,
    responses(
        (status = 200, description = "Basket updated", body = Basket),
        (status = 400, description = "Completed-basket guard or malformed body", body = ErrorResponse),
        (status = 404, description = "Basket not found", body = ErrorResponse),
    )
)]
pub async fn update_basket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateBasketRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = body.map_err(|e| ServiceError::InvalidRequest(e.body_text()))?;
    let basket = state
        .basket_service
        .update_basket(id, req.data, req.state)
        .await?;
    Ok(Json(basket))
}

/// `DELETE /basket/{id}` — Remove a basket.
///
/// # Errors
///
/// Returns [`ServiceError::BasketNotFound`] if no row matches.
#[utoipa::path(
    delete,
    path = "/basket/{id}",
    tag = "Baskets",
    summary = "Delete a basket",
    description = "Physically removes the basket row.",
    params(
        ("id" = i64, Path, description = "Basket ID"),
    ),
    responses(
        (status = 200, description = "Basket deleted", body = DeleteBasketResponse),
        (status = 404, description = "Basket not found", body = ErrorResponse),
    )
)]
pub async fn delete_basket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ServiceError> {
    state.basket_service.delete_basket(id).await?;
    Ok(Json(DeleteBasketResponse {
        message: "Basket deleted".to_string(),
    }))
}

/// Basket resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/basket", get(list_baskets).post(create_basket))
        .route(
            "/basket/{id}",
            get(get_basket).patch(update_basket).delete(delete_basket),
        )
}
