//! Catalog service facade.

use std::sync::Arc;
use std::time::Duration;

use cinefeed_core::clock::Clock;
use cinefeed_core::error::StoreError;
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;

use crate::application::event_stream::MovieEventStream;

/// Pace of the event stream exposed over HTTP.
pub const DEFAULT_EVENT_PERIOD: Duration = Duration::from_secs(1);

/// Thin composition of the movie repository and the event-stream generator.
///
/// Holds no state of its own beyond its collaborators: no caching, no error
/// translation. Listing/lookup and subscription are deliberately separate
/// operations — a subscription has stream lifecycle and cancellation
/// semantics a one-shot query does not.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn MovieRepository>,
    clock: Arc<dyn Clock>,
    event_period: Duration,
}

impl CatalogService {
    /// Creates a facade over `repository`, pacing event streams with
    /// [`DEFAULT_EVENT_PERIOD`].
    #[must_use]
    pub fn new(repository: Arc<dyn MovieRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            event_period: DEFAULT_EVENT_PERIOD,
        }
    }

    /// Overrides the event-stream period. Tests pace streams in
    /// milliseconds; the HTTP surface keeps the default.
    #[must_use]
    pub fn with_event_period(mut self, period: Duration) -> Self {
        self.event_period = period;
        self
    }

    /// Lists every movie in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing store fails.
    pub async fn all(&self) -> Result<Vec<Movie>, StoreError> {
        self.repository.find_all().await
    }

    /// Resolves a single movie, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing store fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        self.repository.find_by_id(id).await
    }

    /// Opens an event stream for the movie with `id`.
    ///
    /// The movie is resolved once, here; every event on the stream carries
    /// that same record. An unknown id yields `Ok(None)` and no stream is
    /// spawned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the lookup fails.
    pub async fn events(&self, id: &str) -> Result<Option<MovieEventStream>, StoreError> {
        let Some(movie) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(Some(MovieEventStream::spawn(
            movie,
            Arc::clone(&self.clock),
            self.event_period,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use cinefeed_store::memory::InMemoryMovieRepository;
    use cinefeed_test_support::{FailingMovieRepository, FixedClock};
    use futures::StreamExt;

    fn service_with(repository: Arc<dyn MovieRepository>) -> CatalogService {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        CatalogService::new(repository, clock).with_event_period(Duration::from_millis(5))
    }

    async fn seeded_service(titles: &[&str]) -> (CatalogService, Vec<Movie>) {
        let repository = Arc::new(InMemoryMovieRepository::new());
        let mut movies = Vec::new();
        for title in titles {
            let movie = Movie::new(*title);
            repository.save(&movie).await.unwrap();
            movies.push(movie);
        }
        (service_with(repository), movies)
    }

    #[tokio::test]
    async fn test_all_returns_exactly_the_stored_ids() {
        // Arrange
        let (service, movies) = seeded_service(&["Alpha", "Beta"]).await;

        // Act
        let mut listed: Vec<String> = service.all().await.unwrap().into_iter().map(|m| m.id).collect();

        // Assert
        let mut expected: Vec<String> = movies.into_iter().map(|m| m.id).collect();
        listed.sort();
        expected.sort();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_the_stored_record() {
        let (service, movies) = seeded_service(&["Alpha"]).await;

        let found = service.find_by_id(&movies[0].id).await.unwrap();

        assert_eq!(found, Some(movies[0].clone()));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_none_for_unknown_id() {
        let (service, _) = seeded_service(&["Alpha"]).await;

        let found = service.find_by_id("no-such-id").await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_events_carries_the_movie_resolved_at_stream_start() {
        // Arrange
        let (service, movies) = seeded_service(&["Alpha"]).await;

        // Act
        let mut stream = service.events(&movies[0].id).await.unwrap().unwrap();
        let event = stream.next().await.unwrap();

        // Assert
        assert_eq!(event.movie, movies[0]);
    }

    #[tokio::test]
    async fn test_events_returns_none_for_unknown_id() {
        let (service, _) = seeded_service(&["Alpha"]).await;

        let stream = service.events("no-such-id").await.unwrap();

        assert!(stream.is_none());
    }

    #[tokio::test]
    async fn test_store_faults_propagate_unrecovered() {
        let service = service_with(Arc::new(FailingMovieRepository));

        assert!(service.all().await.is_err());
        assert!(service.find_by_id("any").await.is_err());
        assert!(service.events("any").await.is_err());
    }
}
