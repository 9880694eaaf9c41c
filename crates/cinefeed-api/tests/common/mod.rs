//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinefeed_api::routes;
use cinefeed_api::state::AppState;
use cinefeed_catalog::application::service::CatalogService;
use cinefeed_core::clock::{Clock, SystemClock};
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;
use cinefeed_store::memory::InMemoryMovieRepository;

/// Fast pace for event-stream tests; the production surface uses 1 s.
pub const TEST_EVENT_PERIOD: Duration = Duration::from_millis(10);

/// Build the full app router over the given repository, with the same route
/// structure as `main.rs`.
pub fn build_app(repository: Arc<dyn MovieRepository>) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let catalog = CatalogService::new(repository, clock).with_event_period(TEST_EVENT_PERIOD);

    Router::new()
        .merge(routes::health::router())
        .nest("/movies", routes::movies::router())
        .with_state(AppState::new(catalog))
}

/// Build an app whose store contains one movie per title, returning the
/// stored records alongside it.
pub async fn seeded_app(titles: &[&str]) -> (Router, Vec<Movie>) {
    let repository = Arc::new(InMemoryMovieRepository::new());
    let mut movies = Vec::new();
    for title in titles {
        let movie = Movie::new(*title);
        repository.save(&movie).await.unwrap();
        movies.push(movie);
    }
    (build_app(repository), movies)
}

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a GET request and return the status plus decoded JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
