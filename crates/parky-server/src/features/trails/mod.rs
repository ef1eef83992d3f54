//! Trails: list, lookup by id, and listing by national park

pub mod mapping;
pub mod queries;
pub mod routes;

pub use queries::{
    GetTrailError, GetTrailQuery, ListTrailsError, ListTrailsInNationalParkError,
    ListTrailsInNationalParkQuery,
};
pub use routes::trails_routes;
