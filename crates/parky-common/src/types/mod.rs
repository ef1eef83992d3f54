//! Transfer objects exposed at the Parky API boundary
//!
//! These shapes are what clients see. They are deliberately separate from the
//! server's storage records; the server owns the mapping from record to DTO.
//! Field names are serialized in camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A national park as returned by `GET /api/nationalparks[/{id}]`.
///
/// # Examples
///
/// ```rust
/// use parky_common::types::NationalParkDto;
///
/// let park = NationalParkDto {
///     id: 1,
///     name: "Yellowstone".to_string(),
///     state: "Wyoming".to_string(),
///     picture: None,
///     established: None,
///     created: chrono::Utc::now(),
/// };
/// let json = serde_json::to_value(&park).unwrap();
/// assert_eq!(json["name"], "Yellowstone");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalParkDto {
    /// Store-assigned identifier
    pub id: i32,

    /// Display name of the park
    pub name: String,

    /// State the park is located in
    pub state: String,

    /// Reference to the park's image, when one is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Date the park was established
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<NaiveDate>,

    /// When the record was created in the store
    pub created: DateTime<Utc>,
}

/// Trail difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Expert,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Difficult => write!(f, "difficult"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

/// A trail as returned by `GET /api/trails[/{id}]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailDto {
    pub id: i32,
    pub name: String,
    /// Length in kilometres
    pub distance: f64,
    /// Elevation gain in metres
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
    pub date_created: DateTime<Utc>,
}
