//! Crate error taxonomy.

use thiserror::Error;

/// Errors surfaced by the loader and by search preconditions.
///
/// The search itself has no recoverable failure modes: once it accepts
/// its inputs it runs the fixed iteration budget to completion. Every
/// variant here is raised before the loop starts.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied data violates a precondition: empty city list,
    /// tour/city-list length mismatch, out-of-range tour index, or
    /// fewer than two cities handed to the search.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The input file could not be read (loader only).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
