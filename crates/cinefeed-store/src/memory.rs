//! In-memory implementation of the `MovieRepository` trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use cinefeed_core::error::StoreError;
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;

/// Movie repository backed by a `HashMap`. Used by the test suites; also a
/// valid backend for running the service without a database.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    // Key: movie id
    store: RwLock<HashMap<String, Movie>>,
}

impl InMemoryMovieRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let store = self
            .store
            .read()
            .map_err(|_| StoreError::Infrastructure("lock poison".to_string()))?;

        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let store = self
            .store
            .read()
            .map_err(|_| StoreError::Infrastructure("lock poison".to_string()))?;

        Ok(store.get(id).cloned())
    }

    async fn save(&self, movie: &Movie) -> Result<(), StoreError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| StoreError::Infrastructure("lock poison".to_string()))?;

        store.insert(movie.id.clone(), movie.clone());

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| StoreError::Infrastructure("lock poison".to_string()))?;

        store.clear();

        Ok(())
    }
}
