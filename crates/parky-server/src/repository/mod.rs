//! Read-only data access for parks and trails
//!
//! Handlers depend on these traits rather than on a concrete store, so the
//! router can be built over PostgreSQL in production and over in-memory
//! fakes in tests. Implementations are shared as `Arc<dyn ...>`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::db::DbResult;
use crate::models::{NationalPark, Trail};

pub mod postgres;

pub use postgres::{PgNationalParkRepository, PgTrailRepository};

/// Access to stored national parks
#[async_trait]
pub trait NationalParkRepository: Send + Sync {
    /// All parks, in the order the store returns them
    async fn list(&self) -> DbResult<Vec<NationalPark>>;

    /// The park with `id`, or `None` when no such record exists
    async fn get_by_id(&self, id: i32) -> DbResult<Option<NationalPark>>;
}

/// Access to stored trails
#[async_trait]
pub trait TrailRepository: Send + Sync {
    async fn list(&self) -> DbResult<Vec<Trail>>;

    async fn get_by_id(&self, id: i32) -> DbResult<Option<Trail>>;

    /// Trails belonging to the given park; empty when the park has none or
    /// does not exist
    async fn list_by_national_park(&self, national_park_id: i32) -> DbResult<Vec<Trail>>;
}

pub type SharedNationalParkRepository = Arc<dyn NationalParkRepository>;
pub type SharedTrailRepository = Arc<dyn TrailRepository>;
