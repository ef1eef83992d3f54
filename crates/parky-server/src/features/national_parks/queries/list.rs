use parky_common::types::NationalParkDto;

use crate::db::DbError;
use crate::repository::NationalParkRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListNationalParksError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Every stored park mapped to its transfer shape, in store order
#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn NationalParkRepository,
) -> Result<Vec<NationalParkDto>, ListNationalParksError> {
    let parks = repo.list().await?;

    Ok(parks.into_iter().map(NationalParkDto::from).collect())
}
