//! Cinefeed Core — shared domain abstractions.
//!
//! This crate defines the fundamental types and traits that the catalog
//! context and the store implementations depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod movie;
pub mod repository;
