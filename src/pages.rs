//! HTML page rendering via askama templates.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::Post;

/// Post listing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

/// Single post page.
#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: Post,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Post creation form, with an optional flash line after a rejected submit.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub flash: Option<String>,
}

/// Page shown for unknown post ids.
#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

/// Wrapper to render askama templates as axum responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(rendered) => Html(rendered).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
