mod api_doc;
mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod pages;
mod routes;
mod state;
mod storage;

use std::sync::Arc;

use config::Config;
use state::AppState;
use storage::Storage;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Every log line carries an MM/DD/YYYY, HH:MM:SS timestamp prefix.
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%m/%d/%Y, %H:%M:%S".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("rust-sqlite-blog starting");

    let config = Config::from_env()?;
    config.log_startup();

    let storage = Storage::from_config(&config);
    storage.ensure_schema().await?;

    let state = AppState {
        storage,
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let app = handlers::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
