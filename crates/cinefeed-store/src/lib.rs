//! Cinefeed — movie repository implementations.
//!
//! Two backends behind the same `MovieRepository` trait: a PostgreSQL store
//! keeping each movie as a JSONB document, and an in-memory store used by
//! the test suites.

pub mod memory;
pub mod pg_movie_repository;
