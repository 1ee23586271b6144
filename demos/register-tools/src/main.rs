//! Registers the built-in AWS CLI tool catalog into an in-memory registry
//! and shows what the host platform would receive.

use anyhow::{Context, Result};
use tracing::info;

use aws_tools::catalog::CATEGORY;
use aws_tools::defs::InMemoryRegistry;
use aws_tools::register::register_catalog;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    info!("=== AWS CLI tools: registration demo ===");

    let registry = InMemoryRegistry::new();
    register_catalog(&registry)?;

    for tool in registry.list(CATEGORY) {
        info!(
            tool = tool.name(),
            image = tool.image(),
            args = tool.args().len(),
            mounts = tool.with_files().len(),
            "available"
        );
    }

    let cli = registry
        .get(CATEGORY, "aws_cli_command")
        .context("aws_cli_command missing from registry")?;

    info!(
        "descriptor as the platform sees it:\n{}",
        serde_json::to_string_pretty(&cli)?
    );
    info!("generated script:\n{}", cli.content());

    Ok(())
}
