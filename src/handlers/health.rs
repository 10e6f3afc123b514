use crate::error::HealthResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /healthz handler - Liveness probe
///
/// Reports process liveness only. Does not touch the database, so it
/// answers healthy even when the store is unreachable.
#[utoipa::path(
    get,
    path = routes::HEALTHZ,
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn healthz_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            result: "OK - healthy".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::AppState;
    use crate::storage::Storage;
    use axum::{Router, body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with_database_path(database_path: &str) -> Router {
        let config = Config {
            database_path: database_path.to_string(),
            service_port: 3111,
            service_host: "0.0.0.0".to_string(),
        };
        let storage = Storage::from_config(&config);
        let state = AppState {
            storage,
            config: Arc::new(config),
        };
        crate::handlers::create_router(state)
    }

    #[tokio::test]
    async fn test_healthz_returns_fixed_body() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_database_path(&dir.path().join("blog.db").to_string_lossy());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.result, "OK - healthy");
    }

    #[tokio::test]
    async fn test_healthz_is_independent_of_store_health() {
        // a database path that can never be opened
        let app = app_with_database_path("/nonexistent-dir/unreachable/blog.db");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
