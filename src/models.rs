use serde::{Deserialize, Serialize};

/// A blog post row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Form body for the creation endpoint.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Response type for the metrics endpoint.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub db_connection_count: i64,
    pub post_count: i64,
}
