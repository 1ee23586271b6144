//! Host-to-container file mount specifications.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A declarative instruction for the host runtime to copy a file from the
/// host into the execution container.
///
/// The mount is only ever read by the external runtime; nothing in this
/// workspace touches either path.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileMount {
    source: String,
    destination: String,
}

impl FileMount {
    /// Creates a mount from a host source path to a container destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMount`] when either path is empty.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(Error::InvalidMount {
                reason: "source path cannot be empty".into(),
            });
        }

        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(Error::InvalidMount {
                reason: "destination path cannot be empty".into(),
            });
        }

        Ok(Self {
            source,
            destination,
        })
    }

    /// Returns the host-side source path.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the in-container destination path.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}
