//! Database records
//!
//! These mirror the `national_parks` and `trails` tables one-to-one. They never
//! leave the server; handlers convert them into the transfer objects from
//! `parky_common::types`.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Row of `national_parks`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct NationalPark {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub picture: Option<String>,
    pub established: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Postgres `trail_difficulty` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "trail_difficulty", rename_all = "lowercase")]
pub enum TrailDifficulty {
    Easy,
    Moderate,
    Difficult,
    Expert,
}

/// Row of `trails`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Trail {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: TrailDifficulty,
    pub national_park_id: i32,
    pub created_at: DateTime<Utc>,
}
