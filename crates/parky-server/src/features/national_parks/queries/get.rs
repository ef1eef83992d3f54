use parky_common::types::NationalParkDto;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::repository::NationalParkRepository;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetNationalParkQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetNationalParkError {
    #[error("National park {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn NationalParkRepository,
    query: GetNationalParkQuery,
) -> Result<NationalParkDto, GetNationalParkError> {
    let park = repo
        .get_by_id(query.id)
        .await?
        .ok_or(GetNationalParkError::NotFound(query.id))?;

    Ok(park.into())
}
