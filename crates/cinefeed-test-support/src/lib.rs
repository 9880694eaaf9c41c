//! Shared test doubles for the Cinefeed movie catalog.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::FailingMovieRepository;
