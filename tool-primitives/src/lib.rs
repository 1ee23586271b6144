//! Core shared types for declarative tool definitions.

#![warn(missing_docs, clippy::pedantic)]

mod arg;
mod error;
mod mount;

/// Declared tool arguments.
pub use arg::ToolArg;
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Host-to-container file mount specifications.
pub use mount::FileMount;
