//! Parky Server - Main entry point

use anyhow::{Context, Result};
use parky_common::logging::{init_logging, LogConfig};
use std::sync::Arc;
use tracing::info;

use parky_server::{
    api::{self, AppState},
    config::Config,
    db,
    features::FeatureState,
    repository::{PgNationalParkRepository, PgTrailRepository},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("parky-server")
        .filter_directives("parky_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;
    let _log_guard = init_logging(&log_config)?;

    info!("Starting Parky API server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}",
        config.bind_address()
    );

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to connect to the database")?;
    db::run_migrations(&pool).await?;

    let features = FeatureState::new(
        Arc::new(PgNationalParkRepository::new(pool.clone())),
        Arc::new(PgTrailRepository::new(pool.clone())),
    );

    api::serve(config, AppState { db: pool, features }).await
}
