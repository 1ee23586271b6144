//! Hands the built-in catalog to a registry port.

use thiserror::Error;
use tracing::{error, info};

use tool_defs::{DefinitionError, RegistryError, ToolRegistry};

use crate::catalog::{catalog, CATEGORY};

/// Errors raised while building or registering the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog entry failed to build.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// The registry refused a registration.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Registers every catalog tool under [`CATEGORY`].
///
/// Each success is logged; the first failure is logged and propagated
/// unchanged. Registration is fire-and-forget: there are no retries and no
/// rollback of tools already registered.
///
/// # Errors
///
/// Returns [`CatalogError::Definition`] when a catalog entry fails to
/// build, or [`CatalogError::Registry`] with whatever the registry
/// reported.
pub fn register_catalog(registry: &dyn ToolRegistry) -> Result<(), CatalogError> {
    for tool in catalog()? {
        let name = tool.name().to_owned();
        match registry.register(CATEGORY, tool) {
            Ok(()) => info!(category = CATEGORY, tool = %name, "registered tool"),
            Err(err) => {
                error!(category = CATEGORY, tool = %name, error = %err, "failed to register tool");
                return Err(err.into());
            }
        }
    }
    Ok(())
}
