//! Store error types.

use thiserror::Error;

/// Faults surfaced by a movie store.
///
/// A missing record is not an error; lookups return `Option` instead. These
/// variants cover the faults this system does not recover from.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity or query failure in the backing store.
    #[error("store infrastructure error: {0}")]
    Infrastructure(String),

    /// A stored document could not be decoded into a `Movie`.
    #[error("store serialization error: {0}")]
    Serialization(String),
}
