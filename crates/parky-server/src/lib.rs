//! Parky Server Library
//!
//! Read-only REST API over a national parks and trails dataset.
//!
//! # Architecture
//!
//! - **features**: vertical slices (`national_parks`, `trails`), each with
//!   queries, record-to-DTO mapping and Axum routes
//! - **repository**: data-access traits plus their PostgreSQL implementations
//! - **models**: database records; never serialized to clients
//! - **api**: router assembly, service/health endpoints and server lifecycle
//! - **middleware**: CORS, request tracing and compression
//!
//! Transfer objects live in `parky_common::types` so clients can share them.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use parky_server::{api, config::Config, db, features::FeatureState, repository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     let features = FeatureState::new(
//!         Arc::new(repository::PgNationalParkRepository::new(pool.clone())),
//!         Arc::new(repository::PgTrailRepository::new(pool.clone())),
//!     );
//!     api::serve(config, api::AppState { db: pool, features }).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;
pub mod models;
pub mod repository;

pub use db::{DbError, DbResult};
