//! Routes for the movie catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use futures::future::Either;
use futures::{Stream, StreamExt, stream};
use tracing::{info, instrument};

use cinefeed_core::movie::Movie;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /movies
#[instrument(skip(state))]
async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.catalog.all().await?;
    Ok(Json(movies))
}

/// GET /movies/{movie_id}
///
/// An unknown id yields a `200` with an empty body, not a `404`: the catalog
/// resolves a missing record as an empty result and the route layer preserves
/// that.
#[instrument(skip(state))]
async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Response, ApiError> {
    match state.catalog.find_by_id(&movie_id).await? {
        Some(movie) => Ok(Json(movie).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// GET /movies/{movie_id}/events
///
/// Unbounded `text/event-stream` response, one JSON-encoded event per period,
/// until the client disconnects. An unknown id closes the stream immediately
/// with zero frames.
#[instrument(skip(state))]
async fn movie_events(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let events = match state.catalog.events(&movie_id).await? {
        Some(events) => {
            info!(movie_id = %movie_id, "opening movie event stream");
            Either::Left(events)
        }
        None => Either::Right(stream::empty()),
    };

    Ok(Sse::new(events.map(|event| Event::default().json_data(&event))))
}

/// Returns the router for the movie catalog, to be nested under `/movies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies))
        .route("/{movie_id}", get(get_movie))
        .route("/{movie_id}/events", get(movie_events))
}
