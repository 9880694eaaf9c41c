//! Movie repository abstraction.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::movie::Movie;

/// Repository trait over the backing document store.
///
/// Pass-through queries only; implementations perform no validation and no
/// local recovery.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Returns every movie in the store, ordering store-defined.
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Resolves a movie by id. An absent id is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Persists a record, replacing any existing record with the same id.
    async fn save(&self, movie: &Movie) -> Result<(), StoreError>;

    /// Removes every record. Used only by bootstrap seeding.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
