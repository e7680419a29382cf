use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use moodshelf::api::{create_router, AppState};
use moodshelf::config::Config;
use moodshelf::db;
use moodshelf::services::catalog::GoogleBooksProvider;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;
    info!(database_url = %config.database_url, "Database ready");

    let catalog = Arc::new(GoogleBooksProvider::new(config.catalog_api_url.clone()));
    let state = AppState::new(pool, catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "moodshelf listening");
    axum::serve(listener, app).await?;

    Ok(())
}
