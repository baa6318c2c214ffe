//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `GeohashError`, so functions can simply return
//! `Result<T>`.
use crate::error::GeohashError;

/// Workspace-wide `Result` alias with `GeohashError` as the default error.
pub type Result<T, E = GeohashError> = std::result::Result<T, E>;
