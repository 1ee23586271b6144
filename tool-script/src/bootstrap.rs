//! Enumerated bootstrap variants and their shell preludes.

use serde::{Deserialize, Serialize};

use tool_primitives::{FileMount, Result};

/// In-container path the service account token is mounted at.
pub const KUBE_TOKEN_MOUNT: &str = "/tmp/kubernetes_context_token";

/// In-container path the cluster CA certificate is mounted at.
pub const KUBE_CERT_MOUNT: &str = "/tmp/kubernetes_context_cert";

const AWS_PROFILE_PRELUDE: &str = r#"set -eu
# AWS credentials and config are mounted by the host runtime
if [ ! -f /root/.aws/credentials ] || [ ! -f /root/.aws/config ]; then
    echo "Error: AWS credentials or config not mounted" >&2
    exit 1
fi
"#;

const AWS_INSTALL_PRELUDE: &str = r#"set -eu
# AWS credentials and config are mounted by the host runtime
if [ ! -f /root/.aws/credentials ] || [ ! -f /root/.aws/config ]; then
    echo "Error: AWS credentials or config not mounted" >&2
    exit 1
fi
if ! command -v aws >/dev/null 2>&1; then
    apk add --no-cache --quiet aws-cli >/dev/null
fi
"#;

const KUBERNETES_PRELUDE: &str = r#"set -eu
if [ ! -f /tmp/kubernetes_context_token ] || [ ! -f /tmp/kubernetes_context_cert ]; then
    echo "Error: Kubernetes service account files not mounted" >&2
    exit 1
fi
if ! command -v kubectl >/dev/null 2>&1; then
    curl -sLo /usr/local/bin/kubectl "https://dl.k8s.io/release/v1.30.4/bin/linux/amd64/kubectl"
    chmod +x /usr/local/bin/kubectl
fi
kubectl config set-cluster in-cluster \
    --server="https://kubernetes.default.svc" \
    --certificate-authority=/tmp/kubernetes_context_cert >/dev/null
kubectl config set-credentials in-cluster \
    --token="$(cat /tmp/kubernetes_context_token)" >/dev/null
kubectl config set-context in-cluster --cluster=in-cluster --user=in-cluster >/dev/null
kubectl config use-context in-cluster >/dev/null
"#;

const LOCALSTACK_PRELUDE: &str = r#"set -eu
export AWS_ACCESS_KEY_ID="test"
export AWS_SECRET_ACCESS_KEY="test"
export AWS_DEFAULT_REGION="${AWS_DEFAULT_REGION:-us-east-1}"
export AWS_ENDPOINT_URL="${AWS_ENDPOINT_URL:-http://localstack:4566}"
"#;

/// Identity/credential setup prepended to every tool script.
///
/// Each variant renders a fixed prelude whose steps run in a strict order:
/// mounted-file checks, quiet binary installs, cluster context
/// configuration, environment exports. A failed check exits non-zero before
/// the command body runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bootstrap {
    /// Mounted `~/.aws` credentials on an image that ships the AWS CLI.
    #[default]
    AwsProfile,
    /// Mounted `~/.aws` credentials plus a quiet package-manager install of
    /// the AWS CLI for images that do not ship it.
    AwsProfileWithInstall,
    /// In-cluster `kubectl` context built from a mounted service account
    /// token and CA certificate.
    KubernetesContext,
    /// Static LocalStack test credentials and endpoint exports.
    LocalStack,
}

impl Bootstrap {
    /// Returns the fixed shell prelude for this variant.
    ///
    /// Every prelude begins with `set -eu`.
    #[must_use]
    pub fn prelude(self) -> &'static str {
        match self {
            Self::AwsProfile => AWS_PROFILE_PRELUDE,
            Self::AwsProfileWithInstall => AWS_INSTALL_PRELUDE,
            Self::KubernetesContext => KUBERNETES_PRELUDE,
            Self::LocalStack => LOCALSTACK_PRELUDE,
        }
    }

    /// Returns the file mounts the host runtime must provide for the
    /// prelude's identity checks to pass.
    ///
    /// # Errors
    ///
    /// Propagates [`tool_primitives::Error::InvalidMount`]; the built-in
    /// paths always validate.
    pub fn file_mounts(self) -> Result<Vec<FileMount>> {
        match self {
            Self::AwsProfile | Self::AwsProfileWithInstall => Ok(vec![
                FileMount::new("$HOME/.aws/credentials", "/root/.aws/credentials")?,
                FileMount::new("$HOME/.aws/config", "/root/.aws/config")?,
            ]),
            Self::KubernetesContext => Ok(vec![
                FileMount::new(
                    "/var/run/secrets/kubernetes.io/serviceaccount/token",
                    KUBE_TOKEN_MOUNT,
                )?,
                FileMount::new(
                    "/var/run/secrets/kubernetes.io/serviceaccount/ca.crt",
                    KUBE_CERT_MOUNT,
                )?,
            ]),
            Self::LocalStack => Ok(Vec::new()),
        }
    }

    /// Environment variable names the host must forward into the container.
    #[must_use]
    pub fn passthrough_env(self) -> Vec<String> {
        match self {
            Self::AwsProfile | Self::AwsProfileWithInstall | Self::KubernetesContext => {
                vec!["AWS_PROFILE".to_owned()]
            }
            Self::LocalStack => Vec::new(),
        }
    }

    /// Composes the full tool script: prelude, one newline, then the
    /// caller's command body appended unmodified.
    #[must_use]
    pub fn compose(self, body: &str) -> String {
        format!("{}\n{body}", self.prelude())
    }
}
