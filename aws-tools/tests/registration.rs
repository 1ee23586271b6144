use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aws_tools::catalog::{self, CATEGORY};
use aws_tools::defs::{
    InMemoryRegistry, RegistryError, RegistryResult, ToolDefinition, ToolRegistry,
};
use aws_tools::register::{CatalogError, register_catalog};

struct RecordingRegistry {
    seen: Mutex<Vec<(String, String)>>,
}

impl RecordingRegistry {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl ToolRegistry for RecordingRegistry {
    fn register(&self, category: &str, tool: ToolDefinition) -> RegistryResult<()> {
        self.seen
            .lock()
            .unwrap()
            .push((category.to_owned(), tool.name().to_owned()));
        Ok(())
    }
}

struct RefusingRegistry {
    attempts: AtomicUsize,
}

impl ToolRegistry for RefusingRegistry {
    fn register(&self, _category: &str, _tool: ToolDefinition) -> RegistryResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(RegistryError::rejected("registry offline"))
    }
}

#[test]
fn registers_whole_catalog_in_order() {
    let registry = RecordingRegistry::new();
    register_catalog(&registry).expect("registration");

    let seen = registry.seen.lock().unwrap();
    let names: Vec<&str> = seen.iter().map(|(_, name)| name.as_str()).collect();
    assert_eq!(
        names,
        ["aws_cli_command", "aws_localstack_command", "eks_kubectl_command"]
    );
    assert!(seen.iter().all(|(category, _)| category == CATEGORY));
}

#[test]
fn first_failure_aborts_registration() {
    let registry = RefusingRegistry {
        attempts: AtomicUsize::new(0),
    };

    let err = register_catalog(&registry).expect_err("should propagate");
    assert!(matches!(err, CatalogError::Registry(RegistryError::Rejected { .. })));
    assert_eq!(registry.attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn second_registration_collides() {
    let registry = InMemoryRegistry::new();
    register_catalog(&registry).expect("first registration");

    let err = register_catalog(&registry).expect_err("duplicates should fail");
    assert!(matches!(
        err,
        CatalogError::Registry(RegistryError::DuplicateTool { ref name, .. })
            if name == "aws_cli_command"
    ));
}

#[test]
fn registered_definitions_keep_script_shape() {
    let registry = InMemoryRegistry::new();
    register_catalog(&registry).expect("registration");

    let tools = registry.list(CATEGORY);
    assert_eq!(tools.len(), 3);
    for tool in &tools {
        assert!(tool.content().starts_with("set -eu\n"), "{}", tool.name());
        assert!(tool.args().iter().any(|arg| arg.name() == "command" && arg.is_required()));
        assert_eq!(tool.icon_url(), Some(catalog::AWS_ICON_URL));
    }

    let cli = registry.get(CATEGORY, "aws_cli_command").expect("cli tool");
    let json = serde_json::to_value(&cli).expect("json");
    assert_eq!(json["type"], "docker");
    assert_eq!(json["env"][0], "AWS_PROFILE");
}
