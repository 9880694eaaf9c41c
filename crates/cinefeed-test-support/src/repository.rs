//! Test repositories — mock `MovieRepository` implementations for tests.

use async_trait::async_trait;
use cinefeed_core::error::StoreError;
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;

/// A movie repository that fails every operation with an infrastructure
/// error. Useful for testing error-propagation paths.
#[derive(Debug)]
pub struct FailingMovieRepository;

#[async_trait]
impl MovieRepository for FailingMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _movie: &Movie) -> Result<(), StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        Err(StoreError::Infrastructure("connection refused".into()))
    }
}
