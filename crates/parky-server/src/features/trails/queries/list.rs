use parky_common::types::TrailDto;

use crate::db::DbError;
use crate::repository::TrailRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListTrailsError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(repo: &dyn TrailRepository) -> Result<Vec<TrailDto>, ListTrailsError> {
    let trails = repo.list().await?;

    Ok(trails.into_iter().map(TrailDto::from).collect())
}
