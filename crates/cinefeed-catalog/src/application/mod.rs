//! Application layer for the catalog context.

pub mod event_stream;
pub mod service;
