//! Error type shared by the library and the command-line binary.
//!
//! `GeohashError` covers every way a single invocation can fail: bad caller
//! input, an unreachable feed, a symbol or period without trades, and malformed
//! feed payloads. All of them are terminal for the run.
use std::io;

use thiserror::Error;

/// Unified error type for geohash computations.
#[derive(Error, Debug)]
pub enum GeohashError {
    /// Caller input rejected before any hashing or network work.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The price feed could not be reached or answered with a failure status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The symbol is unknown or the feed has no trades for the period.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed hex digest or feed row.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while decoding the JSON market listing.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
