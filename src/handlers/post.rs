use crate::error::ApiError;
use crate::pages::{HtmlTemplate, PostTemplate};
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /{id} handler - Single post page
///
/// Renders the 404 page both for ids with no matching row and for path
/// segments that are not integers at all.
#[utoipa::path(
    get,
    path = routes::POST_ITEM,
    params(
        ("id" = String, Path, description = "Numeric id of the post")
    ),
    responses(
        (status = 200, description = "HTML page for the post", content_type = "text/html"),
        (status = 404, description = "No post with this id", content_type = "text/html"),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn post_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<HtmlTemplate<PostTemplate>, ApiError> {
    let post = match post_id.parse::<i64>() {
        Ok(id) => state.storage.get_post(id).await?,
        Err(_) => None,
    };

    match post {
        Some(post) => {
            tracing::info!("Article \"{}\" retrieved", post.title);
            Ok(HtmlTemplate(PostTemplate { post }))
        }
        None => {
            tracing::info!("A non-existing article was accessed and a 404 page returned");
            Err(ApiError::PostNotFound)
        }
    }
}
