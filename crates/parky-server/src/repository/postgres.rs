//! PostgreSQL repositories backed by sqlx

use async_trait::async_trait;
use sqlx::PgPool;

use super::{NationalParkRepository, TrailRepository};
use crate::db::DbResult;
use crate::models::{NationalPark, Trail};

#[derive(Debug, Clone)]
pub struct PgNationalParkRepository {
    pool: PgPool,
}

impl PgNationalParkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NationalParkRepository for PgNationalParkRepository {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<NationalPark>> {
        let parks = sqlx::query_as::<_, NationalPark>(
            r#"
            SELECT id, name, state, picture, established, created_at
            FROM national_parks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(parks)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> DbResult<Option<NationalPark>> {
        let park = sqlx::query_as::<_, NationalPark>(
            r#"
            SELECT id, name, state, picture, established, created_at
            FROM national_parks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(park)
    }
}

#[derive(Debug, Clone)]
pub struct PgTrailRepository {
    pool: PgPool,
}

impl PgTrailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrailRepository for PgTrailRepository {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> DbResult<Vec<Trail>> {
        let trails = sqlx::query_as::<_, Trail>(
            r#"
            SELECT id, name, distance, elevation, difficulty, national_park_id, created_at
            FROM trails
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trails)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> DbResult<Option<Trail>> {
        let trail = sqlx::query_as::<_, Trail>(
            r#"
            SELECT id, name, distance, elevation, difficulty, national_park_id, created_at
            FROM trails
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trail)
    }

    #[tracing::instrument(skip(self))]
    async fn list_by_national_park(&self, national_park_id: i32) -> DbResult<Vec<Trail>> {
        let trails = sqlx::query_as::<_, Trail>(
            r#"
            SELECT id, name, distance, elevation, difficulty, national_park_id, created_at
            FROM trails
            WHERE national_park_id = $1
            ORDER BY id
            "#,
        )
        .bind(national_park_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trails)
    }
}
