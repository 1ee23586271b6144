//! Immutable tool descriptors and their builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use tool_primitives::{FileMount, ToolArg};
use tool_script::Bootstrap;

use crate::validate;

/// Container image used when a definition does not name one.
pub const DEFAULT_IMAGE: &str = "amazon/aws-cli:latest";

/// Result alias for definition construction.
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Errors raised while building a tool definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// A mandatory builder field was never supplied.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A supplied field failed validation.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// A primitive value embedded in the definition failed validation.
    #[error(transparent)]
    Primitive(#[from] tool_primitives::Error),
}

/// How the host platform executes a tool.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionKind {
    /// Run the generated script inside an ephemeral Docker container.
    #[default]
    Docker,
}

/// Immutable descriptor of a single executable capability.
///
/// The descriptor is assembled once by [`ToolDefinitionBuilder`] and never
/// mutated afterwards. Its script content is always the bootstrap prelude
/// followed by the caller's command body; execution, including any failure
/// of the script itself, belongs entirely to the host platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    name: String,
    description: String,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<ToolArg>,
    image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(rename = "type", default)]
    kind: ExecutionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    env: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    with_files: Vec<FileMount>,
}

impl ToolDefinition {
    /// Starts building a definition with the given name and description.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ToolDefinitionBuilder {
        ToolDefinitionBuilder {
            name: name.into(),
            description: description.into(),
            body: None,
            bootstrap: Bootstrap::default(),
            args: Vec::new(),
            image: None,
            icon_url: None,
            env: Vec::new(),
            mounts: Vec::new(),
        }
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the full generated script: bootstrap prelude plus body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the declared arguments.
    #[must_use]
    pub fn args(&self) -> &[ToolArg] {
        &self.args
    }

    /// Returns the container image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the icon URL shown by the host platform, if any.
    #[must_use]
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    /// Returns the execution kind.
    #[must_use]
    pub fn kind(&self) -> ExecutionKind {
        self.kind
    }

    /// Returns the environment variable names forwarded into the container.
    #[must_use]
    pub fn env(&self) -> &[String] {
        &self.env
    }

    /// Returns the file mounts the host runtime must provide.
    #[must_use]
    pub fn with_files(&self) -> &[FileMount] {
        &self.with_files
    }

    /// Returns true iff every required argument maps to a truthy value.
    #[must_use]
    pub fn validate_args(&self, supplied: &Map<String, Value>) -> bool {
        validate::validate_args(&self.args, supplied)
    }

    /// Returns a message naming the missing required arguments, or `None`
    /// when [`ToolDefinition::validate_args`] would return true.
    #[must_use]
    pub fn missing_args_message(&self, supplied: &Map<String, Value>) -> Option<String> {
        validate::missing_args_message(&self.args, supplied)
    }
}

/// Builder for [`ToolDefinition`].
#[derive(Debug)]
pub struct ToolDefinitionBuilder {
    name: String,
    description: String,
    body: Option<String>,
    bootstrap: Bootstrap,
    args: Vec<ToolArg>,
    image: Option<String>,
    icon_url: Option<String>,
    env: Vec<String>,
    mounts: Vec<FileMount>,
}

impl ToolDefinitionBuilder {
    /// Sets the command body appended after the bootstrap prelude.
    ///
    /// The body is an arbitrary shell fragment; it is carried verbatim and
    /// never parsed here.
    #[must_use]
    pub fn script(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Selects the bootstrap variant prepended to the body.
    #[must_use]
    pub fn bootstrap(mut self, bootstrap: Bootstrap) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Declares one argument.
    #[must_use]
    pub fn arg(mut self, arg: ToolArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Declares several arguments at once.
    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = ToolArg>) -> Self {
        self.args.extend(args);
        self
    }

    /// Sets the container image, replacing [`DEFAULT_IMAGE`].
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the icon URL shown by the host platform.
    #[must_use]
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Forwards an additional environment variable into the container,
    /// beyond what the bootstrap variant already requires.
    #[must_use]
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.env.push(name.into());
        self
    }

    /// Adds a file mount beyond what the bootstrap variant already requires.
    #[must_use]
    pub fn mount(mut self, mount: FileMount) -> Self {
        self.mounts.push(mount);
        self
    }

    /// Finalises the definition.
    ///
    /// Composes the script content from the bootstrap prelude and the body,
    /// and attaches the bootstrap's file mounts and passthrough environment
    /// ahead of any caller-supplied extras. No side effects occur; the
    /// filesystem and network are never touched at definition time.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidField`] when the name or
    /// description is empty, and [`DefinitionError::MissingField`] when no
    /// script body was supplied.
    pub fn build(self) -> DefinitionResult<ToolDefinition> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::InvalidField {
                field: "name",
                reason: "name cannot be empty".into(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(DefinitionError::InvalidField {
                field: "description",
                reason: "description cannot be empty".into(),
            });
        }
        let body = self.body.ok_or(DefinitionError::MissingField { field: "script" })?;

        let content = self.bootstrap.compose(&body);

        let mut with_files = self.bootstrap.file_mounts()?;
        with_files.extend(self.mounts);

        let mut env = self.bootstrap.passthrough_env();
        env.extend(self.env);

        Ok(ToolDefinition {
            name: self.name,
            description: self.description,
            content,
            args: self.args,
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
            icon_url: self.icon_url,
            kind: ExecutionKind::Docker,
            env,
            with_files,
        })
    }
}
