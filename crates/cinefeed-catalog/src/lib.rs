//! Cinefeed — movie catalog bounded context.
//!
//! Composes the store accessor with the interval-paced event generator and
//! exposes the three catalog operations: list all, get by id, and subscribe
//! to a movie's event stream.

pub mod application;
pub mod domain;
