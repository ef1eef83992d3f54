use parky_common::types::TrailDto;
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::repository::TrailRepository;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListTrailsInNationalParkQuery {
    pub national_park_id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ListTrailsInNationalParkError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Trails of one park. The park itself is not looked up, so an unknown park
/// id yields an empty list rather than a not-found error.
#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn TrailRepository,
    query: ListTrailsInNationalParkQuery,
) -> Result<Vec<TrailDto>, ListTrailsInNationalParkError> {
    let trails = repo.list_by_national_park(query.national_park_id).await?;

    Ok(trails.into_iter().map(TrailDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{trail, FailingStore, InMemoryStore};

    fn store() -> InMemoryStore {
        InMemoryStore::default()
            .with_trail(trail(1, "Fairy Falls", 1))
            .with_trail(trail(2, "The Narrows", 2))
            .with_trail(trail(3, "Mount Washburn", 1))
    }

    #[tokio::test]
    async fn test_only_trails_of_requested_park() {
        let trails = handle(&store(), ListTrailsInNationalParkQuery { national_park_id: 1 })
            .await
            .unwrap();

        let ids: Vec<i32> = trails.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(trails.iter().all(|t| t.national_park_id == 1));
    }

    #[tokio::test]
    async fn test_unknown_park_yields_empty_list() {
        let trails = handle(&store(), ListTrailsInNationalParkQuery { national_park_id: 42 })
            .await
            .unwrap();
        assert!(trails.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let result =
            handle(&FailingStore, ListTrailsInNationalParkQuery { national_park_id: 1 }).await;
        assert!(matches!(result, Err(ListTrailsInNationalParkError::Database(_))));
    }
}
