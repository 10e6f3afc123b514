use crate::error::ApiError;
use crate::pages::{HtmlTemplate, IndexTemplate};
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET / handler - Post listing page
///
/// Lists every post in the store's natural scan order.
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "HTML page listing all posts", content_type = "text/html"),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn index_handler(
    State(state): State<AppState>,
) -> Result<HtmlTemplate<IndexTemplate>, ApiError> {
    let posts = state.storage.list_posts().await?;

    tracing::info!("Main page retrieved with {} posts", posts.len());
    Ok(HtmlTemplate(IndexTemplate { posts }))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::state::AppState;
    use crate::storage::Storage;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use sqlx::Connection;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn setup_test_app() -> (Router, Storage, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            database_path: dir.path().join("blog.db").to_string_lossy().into_owned(),
            service_port: 3111,
            service_host: "0.0.0.0".to_string(),
        };

        let storage = Storage::from_config(&config);
        storage.ensure_schema().await.expect("Failed to provision schema");

        let state = AppState {
            storage: storage.clone(),
            config: Arc::new(config),
        };

        (crate::handlers::create_router(state), storage, dir)
    }

    #[tokio::test]
    async fn test_index_with_no_posts() {
        let (app, _storage, _dir) = setup_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Posts"));
    }

    #[tokio::test]
    async fn test_index_lists_created_posts() {
        let (app, storage, _dir) = setup_test_app().await;

        let mut conn = storage.open().await.unwrap();
        storage
            .insert_post(&mut conn, "Rust on the backend", "body one")
            .await
            .unwrap();
        storage
            .insert_post(&mut conn, "Counters in SQLite", "body two")
            .await
            .unwrap();
        let _ = conn.close().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Rust on the backend"));
        assert!(html.contains("Counters in SQLite"));
        assert!(html.contains("href=\"/1\""));
    }
}
