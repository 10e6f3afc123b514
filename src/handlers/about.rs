use crate::pages::{AboutTemplate, HtmlTemplate};
use crate::routes;

/// GET /about handler - Static about page
#[utoipa::path(
    get,
    path = routes::ABOUT,
    responses(
        (status = 200, description = "HTML about page", content_type = "text/html")
    ),
    tag = "posts"
)]
pub async fn about_handler() -> HtmlTemplate<AboutTemplate> {
    tracing::info!("\"About Us\" page retrieved");
    HtmlTemplate(AboutTemplate)
}
