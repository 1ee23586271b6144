//! The built-in tool catalog.
//!
//! Each function assembles one finished [`ToolDefinition`]. The
//! real-credentials and LocalStack flavors of the free-form CLI tool ship
//! side by side under distinct names; a deployment picks by name.

use tool_defs::{DefinitionResult, ToolDefinition, DEFAULT_IMAGE};
use tool_primitives::ToolArg;
use tool_script::Bootstrap;

/// Registry category every built-in tool lands under.
pub const CATEGORY: &str = "aws_cli";

/// Icon shown by the host platform next to each tool.
pub const AWS_ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/9/93/Amazon_Web_Services_Logo.svg/2560px-Amazon_Web_Services_Logo.svg.png";

const AWS_CLI_BODY: &str = r#"if [ -z "$command" ]; then
    echo "Error: Command is required"
    exit 1
fi

echo "=== Executing AWS CLI Command ==="
echo "Command: aws $command"
echo ""

aws $command
"#;

const KUBECTL_BODY: &str = r#"if [ -z "$command" ]; then
    echo "Error: Command is required"
    exit 1
fi

echo "=== Executing kubectl Command ==="
echo "Command: kubectl $command"
echo ""

kubectl $command
"#;

fn command_arg(cli: &str) -> DefinitionResult<ToolArg> {
    let description = format!(
        "The command to pass to {cli} (e.g. 's3 ls', 'ec2 describe-instances', 'iam list-users')"
    );
    Ok(ToolArg::new("command", description)?.required())
}

/// The free-form AWS CLI tool: one required `command` argument appended to
/// `aws ` and executed verbatim against the caller's real credentials.
///
/// # Errors
///
/// Returns [`tool_defs::DefinitionError`] if assembly fails; the built-in
/// fields always validate.
pub fn aws_cli_command() -> DefinitionResult<ToolDefinition> {
    ToolDefinition::builder("aws_cli_command", "Execute any AWS CLI command")
        .script(AWS_CLI_BODY)
        .bootstrap(Bootstrap::AwsProfile)
        .arg(command_arg("the AWS CLI")?)
        .image(DEFAULT_IMAGE)
        .icon_url(AWS_ICON_URL)
        .build()
}

/// The LocalStack flavor of [`aws_cli_command`]: identical command surface,
/// but the bootstrap exports static test credentials and points the CLI at
/// a LocalStack endpoint instead of mounting real credentials.
///
/// # Errors
///
/// Returns [`tool_defs::DefinitionError`] if assembly fails; the built-in
/// fields always validate.
pub fn aws_localstack_command() -> DefinitionResult<ToolDefinition> {
    ToolDefinition::builder(
        "aws_localstack_command",
        "Execute any AWS CLI command against a LocalStack endpoint",
    )
    .script(AWS_CLI_BODY)
    .bootstrap(Bootstrap::LocalStack)
    .arg(command_arg("the AWS CLI")?)
    .image(DEFAULT_IMAGE)
    .icon_url(AWS_ICON_URL)
    .build()
}

/// The in-cluster `kubectl` tool: one required `command` argument appended
/// to `kubectl `, running under a context built from the mounted service
/// account identity.
///
/// # Errors
///
/// Returns [`tool_defs::DefinitionError`] if assembly fails; the built-in
/// fields always validate.
pub fn eks_kubectl_command() -> DefinitionResult<ToolDefinition> {
    ToolDefinition::builder(
        "eks_kubectl_command",
        "Execute any kubectl command inside the cluster",
    )
    .script(KUBECTL_BODY)
    .bootstrap(Bootstrap::KubernetesContext)
    .arg(command_arg("kubectl")?)
    .image(DEFAULT_IMAGE)
    .icon_url(AWS_ICON_URL)
    .build()
}

/// Builds the whole catalog in a fixed order.
///
/// # Errors
///
/// Propagates the first [`tool_defs::DefinitionError`] from the individual
/// builders.
pub fn catalog() -> DefinitionResult<Vec<ToolDefinition>> {
    Ok(vec![
        aws_cli_command()?,
        aws_localstack_command()?,
        eks_kubectl_command()?,
    ])
}
