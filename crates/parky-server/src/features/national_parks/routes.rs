//! National park API routes
//!
//! # Route Structure
//!
//! - `GET /api/nationalparks` - List every national park
//! - `GET /api/nationalparks/:id` - Get one national park
//! - `GET /api/nationalparks/:id/trails` - List the trails of a national park
//!
//! A non-integer `:id` does not match and yields an empty 404, like an absent
//! park does.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::queries::{GetNationalParkError, GetNationalParkQuery, ListNationalParksError};
use crate::api::response::{not_found, ErrorResponse};
use crate::features::{trails, FeatureState};
use crate::repository::SharedNationalParkRepository;

pub fn national_parks_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_national_parks))
        .route("/:id", get(get_national_park))
        .route("/:id/trails", get(trails::routes::list_trails_in_national_park))
}

/// List every national park
///
/// # Response
///
/// - `200 OK` - JSON array of parks, empty when none are stored
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(repo))]
async fn list_national_parks(
    State(repo): State<SharedNationalParkRepository>,
) -> Result<Response, NationalParkApiError> {
    let parks = super::queries::list::handle(repo.as_ref()).await?;

    tracing::debug!(count = parks.len(), "National parks listed via API");

    Ok(Json(parks).into_response())
}

/// Get a single national park
///
/// # Response
///
/// - `200 OK` - The park
/// - `404 Not Found` - No park with that id (empty body)
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(repo, id))]
async fn get_national_park(
    State(repo): State<SharedNationalParkRepository>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, NationalParkApiError> {
    let Path(id) = id.map_err(NationalParkApiError::UnmatchedId)?;

    let park = super::queries::get::handle(repo.as_ref(), GetNationalParkQuery { id }).await?;

    tracing::debug!(park_id = park.id, "National park retrieved via API");

    Ok(Json(park).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum NationalParkApiError {
    UnmatchedId(PathRejection),
    List(ListNationalParksError),
    Get(GetNationalParkError),
}

impl From<ListNationalParksError> for NationalParkApiError {
    fn from(err: ListNationalParksError) -> Self {
        Self::List(err)
    }
}

impl From<GetNationalParkError> for NationalParkApiError {
    fn from(err: GetNationalParkError) -> Self {
        Self::Get(err)
    }
}

impl IntoResponse for NationalParkApiError {
    fn into_response(self) -> Response {
        match self {
            NationalParkApiError::UnmatchedId(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Path id is not an integer");
                not_found()
            },
            NationalParkApiError::Get(GetNationalParkError::NotFound(_)) => not_found(),
            NationalParkApiError::List(ListNationalParksError::Database(e)) => {
                tracing::error!(error = %e, "Database error during national parks listing");
                ErrorResponse::internal("A database error occurred")
            },
            NationalParkApiError::Get(GetNationalParkError::Database(e)) => {
                tracing::error!(error = %e, "Database error during national park retrieval");
                ErrorResponse::internal("A database error occurred")
            },
        }
    }
}
