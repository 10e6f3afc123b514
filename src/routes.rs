// Route path constants - single source of truth for all paths

pub const INDEX: &str = "/";
pub const ABOUT: &str = "/about";
pub const CREATE: &str = "/create";
pub const HEALTHZ: &str = "/healthz";
pub const METRICS: &str = "/metrics";
pub const OPENAPI: &str = "/api-docs/openapi.json";
pub const POST_ITEM: &str = "/{id}";
