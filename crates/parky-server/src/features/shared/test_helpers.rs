//! Test fixtures and in-memory repositories
//!
//! ```rust,ignore
//! use crate::features::shared::test_helpers::{park, InMemoryStore};
//!
//! let store = InMemoryStore::default().with_park(park(1, "Yellowstone"));
//! let parks = queries::list::handle(&store).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::db::{DbError, DbResult};
use crate::models::{NationalPark, Trail, TrailDifficulty};
use crate::repository::{NationalParkRepository, TrailRepository};

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

/// Park record with deterministic values derived from `id`
pub fn park(id: i32, name: &str) -> NationalPark {
    NationalPark {
        id,
        name: name.to_string(),
        state: "Wyoming".to_string(),
        picture: Some(format!("parks/{id}.jpg")),
        established: NaiveDate::from_ymd_opt(1872, 3, 1),
        created_at: fixed_timestamp(),
    }
}

/// Trail record belonging to `national_park_id`
pub fn trail(id: i32, name: &str, national_park_id: i32) -> Trail {
    Trail {
        id,
        name: name.to_string(),
        distance: 5.0 + f64::from(id),
        elevation: 120.0,
        difficulty: TrailDifficulty::Moderate,
        national_park_id,
        created_at: fixed_timestamp(),
    }
}

/// Store whose records are returned in insertion order
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    parks: Vec<NationalPark>,
    trails: Vec<Trail>,
}

impl InMemoryStore {
    pub fn with_park(mut self, park: NationalPark) -> Self {
        self.parks.push(park);
        self
    }

    pub fn with_trail(mut self, trail: Trail) -> Self {
        self.trails.push(trail);
        self
    }
}

#[async_trait]
impl NationalParkRepository for InMemoryStore {
    async fn list(&self) -> DbResult<Vec<NationalPark>> {
        Ok(self.parks.clone())
    }

    async fn get_by_id(&self, id: i32) -> DbResult<Option<NationalPark>> {
        Ok(self.parks.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl TrailRepository for InMemoryStore {
    async fn list(&self) -> DbResult<Vec<Trail>> {
        Ok(self.trails.clone())
    }

    async fn get_by_id(&self, id: i32) -> DbResult<Option<Trail>> {
        Ok(self.trails.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_national_park(&self, national_park_id: i32) -> DbResult<Vec<Trail>> {
        Ok(self
            .trails
            .iter()
            .filter(|t| t.national_park_id == national_park_id)
            .cloned()
            .collect())
    }
}

/// Store whose every call fails as if the database were unreachable
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

fn unavailable<T>() -> DbResult<T> {
    Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl NationalParkRepository for FailingStore {
    async fn list(&self) -> DbResult<Vec<NationalPark>> {
        unavailable()
    }

    async fn get_by_id(&self, _id: i32) -> DbResult<Option<NationalPark>> {
        unavailable()
    }
}

#[async_trait]
impl TrailRepository for FailingStore {
    async fn list(&self) -> DbResult<Vec<Trail>> {
        unavailable()
    }

    async fn get_by_id(&self, _id: i32) -> DbResult<Option<Trail>> {
        unavailable()
    }

    async fn list_by_national_park(&self, _national_park_id: i32) -> DbResult<Vec<Trail>> {
        unavailable()
    }
}
