//! Tool definition descriptors and the registration port.
//!
//! A [`ToolDefinition`] is an immutable description of one executable
//! capability: its declared arguments, container image, generated script,
//! required environment, and file mounts. Definitions are built once,
//! validated up front, and handed to a [`ToolRegistry`] implementation
//! provided by the host platform.

#![warn(missing_docs, clippy::pedantic)]

mod definition;
mod registry;
mod validate;

/// Tool descriptors and their builder.
pub use definition::{
    DefinitionError, DefinitionResult, ExecutionKind, ToolDefinition, ToolDefinitionBuilder,
    DEFAULT_IMAGE,
};
/// Registration port and the in-memory registry.
pub use registry::{InMemoryRegistry, RegistryError, RegistryResult, ToolRegistry};
/// Pure declared-argument validation.
pub use validate::{missing_args_message, validate_args};
