use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{MetricsResponse, PostForm};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-sqlite-blog API",
        version = "1.0.0",
        description = "A small blog service with counter metrics, backed by SQLite"
    ),
    paths(
        handlers::index::index_handler,
        handlers::post::post_handler,
        handlers::about::about_handler,
        handlers::create::create_form_handler,
        handlers::create::create_post_handler,
        handlers::health::healthz_handler,
        handlers::metrics::metrics_handler
    ),
    components(
        schemas(
            PostForm,
            MetricsResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "posts", description = "Blog pages and post creation"),
        (name = "health", description = "Liveness probe"),
        (name = "metrics", description = "Counter metrics")
    )
)]
pub struct ApiDoc;
