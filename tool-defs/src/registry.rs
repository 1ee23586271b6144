//! Registration port and an in-memory registry implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use thiserror::Error;
use tracing::debug;

use crate::definition::ToolDefinition;

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by tool registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Tool name collided with an existing registration in the category.
    #[error("tool `{name}` is already registered in category `{category}`")]
    DuplicateTool {
        /// Category the registration targeted.
        category: String,
        /// Name of the offending tool.
        name: String,
    },

    /// The registry refused the registration.
    #[error("registration rejected: {reason}")]
    Rejected {
        /// Human-readable reason returned by the registry.
        reason: String,
    },
}

impl RegistryError {
    /// Creates a rejection error from the supplied reason.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Port through which finished tool definitions are handed to the host
/// platform.
///
/// The host controls the success and failure semantics of `register`;
/// callers re-raise whatever comes back and never retry.
pub trait ToolRegistry: Send + Sync {
    /// Registers a tool definition under the given category.
    ///
    /// # Errors
    ///
    /// Returns whatever [`RegistryError`] the implementation reports;
    /// implementations reject duplicate names within a category.
    fn register(&self, category: &str, tool: ToolDefinition) -> RegistryResult<()>;
}

/// Registry that keeps definitions in memory, keyed by category and name.
///
/// Used by tests and local demos; the production registry belongs to the
/// host platform behind the same trait.
#[derive(Default)]
pub struct InMemoryRegistry {
    inner: RwLock<HashMap<String, BTreeMap<String, ToolDefinition>>>,
}

impl std::fmt::Debug for InMemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("tool registry poisoned");
        let names: Vec<String> = inner
            .iter()
            .flat_map(|(category, tools)| {
                tools.keys().map(move |name| format!("{category}/{name}"))
            })
            .collect();
        f.debug_struct("InMemoryRegistry")
            .field("registered", &names)
            .finish()
    }
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the definition registered under `category` and `name`.
    #[must_use]
    pub fn get(&self, category: &str, name: &str) -> Option<ToolDefinition> {
        let inner = self.inner.read().ok()?;
        inner.get(category)?.get(name).cloned()
    }

    /// Lists the definitions in a category, ordered by name.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    #[must_use]
    pub fn list(&self, category: &str) -> Vec<ToolDefinition> {
        let inner = self.inner.read().expect("tool registry poisoned");
        inner
            .get(category)
            .map(|tools| tools.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Lists the known categories in sorted order.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let inner = self.inner.read().expect("tool registry poisoned");
        let mut categories: Vec<String> = inner.keys().cloned().collect();
        categories.sort();
        categories
    }
}

impl ToolRegistry for InMemoryRegistry {
    fn register(&self, category: &str, tool: ToolDefinition) -> RegistryResult<()> {
        let mut inner = self.inner.write().expect("tool registry poisoned");
        let tools = inner.entry(category.to_owned()).or_default();
        let name = tool.name().to_owned();
        if tools.contains_key(&name) {
            return Err(RegistryError::DuplicateTool {
                category: category.to_owned(),
                name,
            });
        }

        debug!(category, tool = %name, "registered tool definition");
        tools.insert(name, tool);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str) -> ToolDefinition {
        ToolDefinition::builder(name, "Test tool")
            .script("aws sts get-caller-identity")
            .build()
            .expect("definition")
    }

    #[test]
    fn register_and_fetch() {
        let registry = InMemoryRegistry::new();
        registry
            .register("aws_cli", definition("caller_identity"))
            .expect("register");

        let fetched = registry.get("aws_cli", "caller_identity").expect("get");
        assert_eq!(fetched.name(), "caller_identity");
        assert!(registry.get("aws_cli", "missing").is_none());
        assert!(registry.get("other", "caller_identity").is_none());
    }

    #[test]
    fn duplicate_registration_errors() {
        let registry = InMemoryRegistry::new();
        registry
            .register("aws_cli", definition("caller_identity"))
            .expect("register");

        let err = registry
            .register("aws_cli", definition("caller_identity"))
            .expect_err("duplicate should fail");
        assert!(matches!(
            err,
            RegistryError::DuplicateTool { category, name }
                if category == "aws_cli" && name == "caller_identity"
        ));
    }

    #[test]
    fn same_name_allowed_across_categories() {
        let registry = InMemoryRegistry::new();
        registry.register("aws_cli", definition("cmd")).expect("register");
        registry.register("staging", definition("cmd")).expect("register");
        assert_eq!(registry.categories(), ["aws_cli", "staging"]);
    }

    #[test]
    fn list_orders_by_name() {
        let registry = InMemoryRegistry::new();
        registry.register("aws_cli", definition("zeta")).expect("register");
        registry.register("aws_cli", definition("alpha")).expect("register");

        let tools = registry.list("aws_cli");
        let names: Vec<&str> = tools.iter().map(ToolDefinition::name).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
