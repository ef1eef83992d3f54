pub mod get;
pub mod list;
pub mod list_in_national_park;

pub use get::{GetTrailError, GetTrailQuery};
pub use list::ListTrailsError;
pub use list_in_national_park::{ListTrailsInNationalParkError, ListTrailsInNationalParkQuery};
