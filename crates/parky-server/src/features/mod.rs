//! Feature modules implementing the Parky API
//!
//! Each feature is a vertical slice with its own queries, record-to-DTO
//! mapping and routes. The API is read-only, so there are no commands.
//!
//! # Features
//!
//! - **national_parks**: list parks, get a park by id, list a park's trails
//! - **trails**: list trails, get a trail by id

pub mod national_parks;
pub mod shared;
pub mod trails;

use axum::{extract::FromRef, Router};

use crate::repository::{SharedNationalParkRepository, SharedTrailRepository};

/// Repositories handed to feature routes
///
/// Handlers extract only the repository they need through `FromRef`.
#[derive(Clone, FromRef)]
pub struct FeatureState {
    pub national_parks: SharedNationalParkRepository,
    pub trails: SharedTrailRepository,
}

impl FeatureState {
    pub fn new(
        national_parks: SharedNationalParkRepository,
        trails: SharedTrailRepository,
    ) -> Self {
        Self {
            national_parks,
            trails,
        }
    }
}

/// Router with every feature mounted under its path prefix
///
/// - `/nationalparks` - National parks and their trails
/// - `/trails` - Trails
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/nationalparks", national_parks::national_parks_routes())
        .nest("/trails", trails::trails_routes())
        .with_state(state)
}
