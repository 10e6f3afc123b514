use crate::metrics;
use crate::models::MetricsResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Connection;

/// GET /metrics handler - Counter metrics as JSON
///
/// Increments the connection counter before reading it back, so the
/// reported value includes this request. The post count is recomputed from
/// the posts table and stored into its metric row on the way out; both
/// counter writes are best-effort and only logged on failure.
///
/// When assembling the body fails outright (connection refused, metric row
/// missing) the response goes out with an empty body: the error is logged
/// and printed, and the caller gets nothing to parse. Known gap, kept as-is.
#[utoipa::path(
    get,
    path = routes::METRICS,
    responses(
        (status = 200, description = "Current counter values", body = MetricsResponse)
    ),
    tag = "metrics"
)]
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match collect_metrics(&state).await {
        Ok(body) => {
            tracing::info!("Metrics request successful");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!("Metrics request failed: {err}");
            println!("{err}");
            StatusCode::OK.into_response()
        }
    }
}

async fn collect_metrics(state: &AppState) -> anyhow::Result<MetricsResponse> {
    let mut conn = state.storage.open().await?;

    if let Err(err) = metrics::increment_connection_counter(&mut conn).await {
        tracing::warn!("Db connection count update failed: {err}");
    }

    let db_connection_count =
        metrics::read_counter(&mut conn, metrics::DB_CONNECTION_COUNT).await?;
    let post_count = metrics::count_posts(&mut conn).await?;

    if let Err(err) = metrics::store_post_count(&mut conn, post_count).await {
        tracing::warn!("Post count update failed: {err}");
    }

    let _ = conn.close().await;

    Ok(MetricsResponse {
        db_connection_count,
        post_count,
    })
}
