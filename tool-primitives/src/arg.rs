//! Declared arguments for tool definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_NAME_LEN: usize = 64;

/// An argument a tool declares ahead of execution.
///
/// The host platform surfaces each supplied argument value to the generated
/// script as an environment variable of the same name, so names are
/// restricted to valid shell identifiers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ToolArg {
    name: String,
    description: String,
    #[serde(default)]
    required: bool,
}

impl ToolArg {
    /// Creates an optional argument after validating its fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgName`] if the name is empty, too long, or
    /// not a shell identifier, and [`Error::InvalidArg`] if the description
    /// is empty.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        let description = description.into();
        if description.trim().is_empty() {
            return Err(Error::InvalidArg {
                reason: "description cannot be empty".into(),
            });
        }

        Ok(Self {
            name,
            description,
            required: false,
        })
    }

    /// Marks the argument as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the argument must be supplied with a non-empty value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgName {
            name: String::new(),
            reason: "name cannot be empty".into(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidArgName {
            name: name.into(),
            reason: format!("name length must be <= {MAX_NAME_LEN}"),
        });
    }

    let mut chars = name.chars();
    let leading_ok = chars
        .next()
        .is_some_and(|c| matches!(c, 'a'..='z' | '_'));
    if !leading_ok || !chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_')) {
        return Err(Error::InvalidArgName {
            name: name.into(),
            reason: "name must be a lowercase shell identifier".into(),
        });
    }

    Ok(())
}
