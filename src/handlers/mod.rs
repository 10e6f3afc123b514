pub mod about;
pub mod create;
pub mod health;
pub mod index;
pub mod metrics;
pub mod post;

pub use about::about_handler;
pub use create::{create_form_handler, create_post_handler};
pub use health::healthz_handler;
pub use index::index_handler;
pub use metrics::metrics_handler;
pub use post::post_handler;

use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::routes;
use crate::state::AppState;

/// Build the application router with every route wired to its handler.
///
/// The literal routes are registered before the `/{id}` catch-all; axum
/// matches static segments with higher priority, so `/about` and friends
/// never fall through to the post lookup.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(index_handler))
        .route(routes::ABOUT, get(about_handler))
        .route(
            routes::CREATE,
            get(create_form_handler).post(create_post_handler),
        )
        .route(routes::HEALTHZ, get(healthz_handler))
        .route(routes::METRICS, get(metrics_handler))
        .route(routes::OPENAPI, get(openapi_handler))
        .route(routes::POST_ITEM, get(post_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api-docs/openapi.json handler - machine-readable API description
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
