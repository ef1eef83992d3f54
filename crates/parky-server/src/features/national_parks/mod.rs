//! National parks: list and lookup by id

pub mod mapping;
pub mod queries;
pub mod routes;

pub use queries::{GetNationalParkError, GetNationalParkQuery, ListNationalParksError};
pub use routes::national_parks_routes;
