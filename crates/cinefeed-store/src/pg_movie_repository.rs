//! `PostgreSQL` implementation of the `MovieRepository` trait.
//!
//! Movies live in a single table with a JSONB document column; the relational
//! layer only indexes the id. Store faults are surfaced as-is, this system
//! performs no local recovery.

use async_trait::async_trait;
use sqlx::PgPool;

use cinefeed_core::error::StoreError;
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;

/// PostgreSQL-backed movie repository.
#[derive(Debug, Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    /// Creates a new `PgMovieRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode(doc: serde_json::Value) -> Result<Movie, StoreError> {
    serde_json::from_value(doc).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn infra(e: sqlx::Error) -> StoreError {
    StoreError::Infrastructure(e.to_string())
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let rows: Vec<(serde_json::Value,)> = sqlx::query_as("SELECT doc FROM movies")
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;

        rows.into_iter().map(|(doc,)| decode(doc)).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT doc FROM movies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(infra)?;

        row.map(|(doc,)| decode(doc)).transpose()
    }

    async fn save(&self, movie: &Movie) -> Result<(), StoreError> {
        let doc =
            serde_json::to_value(movie).map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            "INSERT INTO movies (id, doc) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc",
        )
        .bind(&movie.id)
        .bind(doc)
        .execute(&self.pool)
        .await
        .map_err(infra)?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM movies")
            .execute(&self.pool)
            .await
            .map_err(infra)?;

        Ok(())
    }
}
