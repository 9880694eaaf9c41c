//! Cinefeed API — HTTP surface for the movie catalog.
//!
//! Route handlers are thin adapters over the catalog service; startup wiring
//! (configuration, pool, seeding, listener) lives in `main.rs`.

pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
