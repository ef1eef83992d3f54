pub mod get;
pub mod list;

pub use get::{GetNationalParkError, GetNationalParkQuery};
pub use list::ListNationalParksError;
