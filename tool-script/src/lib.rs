//! Bootstrap script composition for containerized CLI tools.
//!
//! Every generated tool script is a fixed identity/credential prelude
//! followed by the caller's command body. The prelude runs first and aborts
//! the whole script when required identity material is missing.

#![warn(missing_docs, clippy::pedantic)]

mod bootstrap;

/// Bootstrap variants and script composition.
pub use bootstrap::{Bootstrap, KUBE_CERT_MOUNT, KUBE_TOKEN_MOUNT};
