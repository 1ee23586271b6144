//! Shared error definitions for tool primitives.

use thiserror::Error;

/// Result alias used throughout the tool definition crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing tool primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument name failed validation.
    #[error("invalid argument name `{name}`: {reason}")]
    InvalidArgName {
        /// The offending name string.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Argument definition failed validation.
    #[error("invalid argument: {reason}")]
    InvalidArg {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// File mount specification failed validation.
    #[error("invalid file mount: {reason}")]
    InvalidMount {
        /// Human-readable reason for rejection.
        reason: String,
    },
}
