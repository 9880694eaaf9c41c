//! Interval-paced event stream for a single movie.
//!
//! A dedicated pump task owns the timer: on each tick it builds one
//! `MovieEvent` and pushes it to the consumer through a bounded channel.
//! When the consumer goes away the task stops, so a disconnecting client
//! never leaves a recurring timer behind.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

use cinefeed_core::clock::Clock;
use cinefeed_core::movie::Movie;

use crate::domain::events::MovieEvent;

/// An unbounded stream of `MovieEvent`s, one per period.
///
/// The stream never ends on its own; dropping it cancels the pump task.
pub struct MovieEventStream {
    events: ReceiverStream<MovieEvent>,
    pump: JoinHandle<()>,
}

impl MovieEventStream {
    /// Spawns the pump task for `movie` and returns its consumer side.
    ///
    /// The first event is emitted one full `period` after subscription, each
    /// timestamp captured from `clock` at the moment of emission.
    #[must_use]
    pub fn spawn(movie: Movie, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let pump = tokio::spawn(pump(movie, clock, period, tx));
        Self {
            events: ReceiverStream::new(rx),
            pump,
        }
    }
}

impl Stream for MovieEventStream {
    type Item = MovieEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

impl Drop for MovieEventStream {
    fn drop(&mut self) {
        self.pump.abort();
    }
}

/// Emits one event per tick until the consumer disconnects.
async fn pump(
    movie: Movie,
    clock: Arc<dyn Clock>,
    period: Duration,
    tx: mpsc::Sender<MovieEvent>,
) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    // Ticks missed while the consumer stalls are dropped, not replayed;
    // emission never runs faster than once per period.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let event = MovieEvent {
                    movie: movie.clone(),
                    now: clock.now(),
                };
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            () = tx.closed() => break,
        }
    }
    debug!(movie_id = %movie.id, "event stream consumer disconnected, ticker stopped");
}
