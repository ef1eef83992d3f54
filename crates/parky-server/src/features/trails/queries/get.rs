use parky_common::types::TrailDto;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::repository::TrailRepository;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetTrailQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetTrailError {
    #[error("Trail {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn TrailRepository,
    query: GetTrailQuery,
) -> Result<TrailDto, GetTrailError> {
    repo.get_by_id(query.id)
        .await?
        .map(TrailDto::from)
        .ok_or(GetTrailError::NotFound(query.id))
}
