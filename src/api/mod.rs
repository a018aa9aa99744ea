//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Routes are mounted at the root level: `/basket`, `/basket/{id}`, and
//! `/health`. With the `swagger-ui` feature enabled the OpenAPI document
//! is served at `/api-docs/openapi.json` with a UI at `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the basket service.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::basket::list_baskets,
        handlers::basket::create_basket,
        handlers::basket::get_basket,
        handlers::basket::update_basket,
        handlers::basket::delete_basket,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Baskets", description = "Basket lifecycle operations"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::util::ServiceExt;

    use super::*;
    use crate::persistence::SqliteStore;
    use crate::service::BasketService;

    async fn make_app() -> Router {
        let Ok(pool) = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
        else {
            panic!("in-memory pool");
        };
        let store = SqliteStore::new(pool);
        let Ok(()) = store.ensure_schema().await else {
            panic!("schema creation failed");
        };
        let state = AppState {
            basket_service: Arc::new(BasketService::new(store)),
        };
        build_router().with_state(state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        send_raw(app, method, uri, body.map(|b| b.to_string())).await
    }

    async fn send_raw(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json)),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("request build failed");
        };

        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("request dispatch failed");
        };
        let status = response.status();

        let Ok(collected) = response.into_body().collect().await else {
            panic!("body collect failed");
        };
        let bytes = collected.to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    async fn create(app: &Router, data: &str) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/basket",
            Some(serde_json::json!({ "data": data })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let Some(id) = body.get("id").and_then(serde_json::Value::as_i64) else {
            panic!("created basket has no id");
        };
        id
    }

    #[tokio::test]
    async fn create_forces_pending_even_when_client_sends_state() {
        let app = make_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/basket",
            Some(serde_json::json!({ "data": "x", "state": "COMPLETED" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("state"), Some(&serde_json::json!("PENDING")));
        assert_eq!(body.get("data"), Some(&serde_json::json!("x")));
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id_and_user_id() {
        let app = make_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/basket",
            Some(serde_json::json!({ "data": "x", "id": 999, "user_id": 7 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(body.get("id"), Some(&serde_json::json!(999)));
        assert_eq!(body.get("user_id"), Some(&serde_json::json!(0)));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_with_400() {
        let app = make_app().await;
        let (status, body) =
            send_raw(&app, "POST", "/basket", Some("not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/error/code"),
            Some(&serde_json::json!(1001))
        );
    }

    #[tokio::test]
    async fn get_unknown_id_returns_404() {
        let app = make_app().await;
        let (status, body) = send(&app, "GET", "/basket/12345", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body.pointer("/error/code"),
            Some(&serde_json::json!(2001))
        );
    }

    #[tokio::test]
    async fn patch_updates_data_and_round_trips() {
        let app = make_app().await;
        let id = create(&app, "x").await;

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/basket/{id}"),
            Some(serde_json::json!({ "data": "y", "state": "PENDING" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("data"), Some(&serde_json::json!("y")));

        let (status, body) = send(&app, "GET", &format!("/basket/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("data"), Some(&serde_json::json!("y")));
    }

    #[tokio::test]
    async fn patch_to_completed_returns_400_and_does_not_persist() {
        let app = make_app().await;
        let id = create(&app, "x").await;

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/basket/{id}"),
            Some(serde_json::json!({ "state": "COMPLETED" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", &format!("/basket/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("state"), Some(&serde_json::json!("PENDING")));
    }

    #[tokio::test]
    async fn patch_unknown_id_returns_404() {
        let app = make_app().await;
        let (status, _) = send(
            &app,
            "PATCH",
            "/basket/777",
            Some(serde_json::json!({ "data": "y" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_get_returns_404() {
        let app = make_app().await;
        let id = create(&app, "x").await;

        let (status, body) = send(&app, "DELETE", &format!("/basket/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.get("message"),
            Some(&serde_json::json!("Basket deleted"))
        );

        let (status, _) = send(&app, "GET", &format!("/basket/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_reflects_creations_and_deletions() {
        let app = make_app().await;
        let mut ids = Vec::new();
        for i in 0..3 {
            ids.push(create(&app, &format!("item-{i}")).await);
        }
        let Some(first) = ids.first() else {
            panic!("no ids");
        };
        let (status, _) = send(&app, "DELETE", &format!("/basket/{first}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/basket", None).await;
        assert_eq!(status, StatusCode::OK);
        let Some(items) = body.as_array() else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let app = make_app().await;
        let (status, body) = send(&app, "GET", "/basket", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn oversized_data_returns_400() {
        let app = make_app().await;
        let (status, _) = send(
            &app,
            "POST",
            "/basket",
            Some(serde_json::json!({ "data": "x".repeat(2049) })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = make_app().await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("status"), Some(&serde_json::json!("healthy")));
    }
}
