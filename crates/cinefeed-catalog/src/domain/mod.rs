//! Domain types for the catalog context.

pub mod events;
