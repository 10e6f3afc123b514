use crate::error::ApiError;
use crate::metrics;
use crate::models::PostForm;
use crate::pages::{CreateTemplate, HtmlTemplate};
use crate::routes;
use crate::state::AppState;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::Connection;

/// GET /create handler - Post creation form
#[utoipa::path(
    get,
    path = routes::CREATE,
    responses(
        (status = 200, description = "HTML creation form", content_type = "text/html")
    ),
    tag = "posts"
)]
pub async fn create_form_handler() -> HtmlTemplate<CreateTemplate> {
    HtmlTemplate(CreateTemplate { flash: None })
}

/// POST /create handler - Insert a new post
///
/// An empty title re-renders the form with a flash line and touches
/// neither the posts table nor the connection counter; no connection is
/// opened at all. A valid submit shares one connection between the counter
/// increment and the insert. The increment runs first and is best-effort:
/// a failed counter update is logged and the insert proceeds.
#[utoipa::path(
    post,
    path = routes::CREATE,
    request_body(content = PostForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Post created, redirect to the post list"),
        (status = 200, description = "Title missing, form re-rendered", content_type = "text/html"),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn create_post_handler(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Response, ApiError> {
    if form.title.is_empty() {
        tracing::info!("Post creation rejected: title is required");
        return Ok(HtmlTemplate(CreateTemplate {
            flash: Some("Title is required!".to_string()),
        })
        .into_response());
    }

    let mut conn = state.storage.open().await?;

    if let Err(err) = metrics::increment_connection_counter(&mut conn).await {
        tracing::warn!("Db connection count update failed: {err}");
    }

    state
        .storage
        .insert_post(&mut conn, &form.title, &form.content)
        .await?;
    let _ = conn.close().await;

    tracing::info!("Article \"{}\" created", form.title);
    Ok(Redirect::to(routes::INDEX).into_response())
}
