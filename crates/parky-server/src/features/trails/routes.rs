//! Trail API routes
//!
//! - `GET /api/trails` - List every trail
//! - `GET /api/trails/:id` - Get one trail
//!
//! `GET /api/nationalparks/:id/trails` is served by
//! [`list_trails_in_national_park`], mounted from the national parks router.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::queries::{
    GetTrailError, GetTrailQuery, ListTrailsError, ListTrailsInNationalParkError,
    ListTrailsInNationalParkQuery,
};
use crate::api::response::{not_found, ErrorResponse};
use crate::features::FeatureState;
use crate::repository::SharedTrailRepository;

pub fn trails_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_trails))
        .route("/:id", get(get_trail))
}

#[tracing::instrument(skip(repo))]
async fn list_trails(
    State(repo): State<SharedTrailRepository>,
) -> Result<Response, TrailApiError> {
    let trails = super::queries::list::handle(repo.as_ref()).await?;

    tracing::debug!(count = trails.len(), "Trails listed via API");

    Ok(Json(trails).into_response())
}

/// # Response
///
/// - `200 OK` - The trail
/// - `404 Not Found` - No trail with that id (empty body)
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(repo, id))]
async fn get_trail(
    State(repo): State<SharedTrailRepository>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, TrailApiError> {
    let Path(id) = id.map_err(TrailApiError::UnmatchedId)?;

    let trail = super::queries::get::handle(repo.as_ref(), GetTrailQuery { id }).await?;

    Ok(Json(trail).into_response())
}

/// List the trails of one national park
///
/// # Response
///
/// - `200 OK` - JSON array of trails, empty when the park has none
/// - `404 Not Found` - Non-integer park id (empty body)
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(repo, national_park_id))]
pub(crate) async fn list_trails_in_national_park(
    State(repo): State<SharedTrailRepository>,
    national_park_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, TrailApiError> {
    let Path(national_park_id) = national_park_id.map_err(TrailApiError::UnmatchedId)?;

    let trails = super::queries::list_in_national_park::handle(
        repo.as_ref(),
        ListTrailsInNationalParkQuery { national_park_id },
    )
    .await?;

    tracing::debug!(
        national_park_id,
        count = trails.len(),
        "Trails of national park listed via API"
    );

    Ok(Json(trails).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub(crate) enum TrailApiError {
    UnmatchedId(PathRejection),
    List(ListTrailsError),
    Get(GetTrailError),
    ListInNationalPark(ListTrailsInNationalParkError),
}

impl From<ListTrailsError> for TrailApiError {
    fn from(err: ListTrailsError) -> Self {
        Self::List(err)
    }
}

impl From<GetTrailError> for TrailApiError {
    fn from(err: GetTrailError) -> Self {
        Self::Get(err)
    }
}

impl From<ListTrailsInNationalParkError> for TrailApiError {
    fn from(err: ListTrailsInNationalParkError) -> Self {
        Self::ListInNationalPark(err)
    }
}

impl IntoResponse for TrailApiError {
    fn into_response(self) -> Response {
        match self {
            TrailApiError::UnmatchedId(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Path id is not an integer");
                not_found()
            },
            TrailApiError::Get(GetTrailError::NotFound(_)) => not_found(),
            TrailApiError::Get(GetTrailError::Database(e))
            | TrailApiError::List(ListTrailsError::Database(e))
            | TrailApiError::ListInNationalPark(ListTrailsInNationalParkError::Database(e)) => {
                tracing::error!(error = %e, "Database error during trail query");
                ErrorResponse::internal("A database error occurred")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = TrailApiError::Get(GetTrailError::NotFound(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_errors_map_to_500() {
        let response = TrailApiError::ListInNationalPark(ListTrailsInNationalParkError::Database(
            DbError::Sqlx(sqlx::Error::PoolClosed),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
