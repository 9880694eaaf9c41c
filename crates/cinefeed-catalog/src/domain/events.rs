//! Events emitted on a movie's subscription stream.

use chrono::{DateTime, Utc};
use cinefeed_core::movie::Movie;
use serde::{Deserialize, Serialize};

/// A transient event pairing a movie with the wall-clock time at emission.
///
/// Never persisted; exists only as a unit flowing through a subscription
/// stream. The embedded movie is the one resolved when the stream started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieEvent {
    /// The movie the stream was opened for.
    pub movie: Movie,
    /// Emission timestamp.
    pub now: DateTime<Utc>,
}
