//! Error taxonomy for the bootstrap pipeline.
//!
//! Every variant is fatal: the pipeline short-circuits on the first failure
//! and the process exits non-zero. Nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("no Python runtime found: tried {tried}")]
    RuntimeNotFound { tried: String },

    #[error(
        "{command} reports Python {found}, but at least {floor} is required"
    )]
    UnsupportedVersion {
        command: String,
        found: String,
        floor: String,
    },

    #[error("failed to create virtual environment at {dir}: {reason}")]
    EnvironmentCreation { dir: PathBuf, reason: String },

    #[error("dependency manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("dependency installation failed ({context})")]
    DependencyInstall {
        context: String,
        /// pip's own diagnostic output, passed through unmodified.
        stderr: String,
    },

    #[error("configuration template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Stable tag for log output and test assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            BootstrapError::RuntimeNotFound { .. } => "runtime_not_found",
            BootstrapError::UnsupportedVersion { .. } => "unsupported_version",
            BootstrapError::EnvironmentCreation { .. } => "environment_creation",
            BootstrapError::ManifestNotFound { .. } => "manifest_not_found",
            BootstrapError::DependencyInstall { .. } => "dependency_install",
            BootstrapError::TemplateNotFound { .. } => "template_not_found",
            BootstrapError::Io(_) => "io_error",
        }
    }

    /// Actionable follow-up for the operator, printed under the diagnostic.
    pub fn remediation(&self) -> Option<String> {
        match self {
            BootstrapError::RuntimeNotFound { .. } => Some(
                "Install Python 3.10+ and make sure it is on your PATH.".to_string(),
            ),
            BootstrapError::UnsupportedVersion { floor, .. } => Some(format!(
                "Upgrade the interpreter to Python {floor} or newer."
            )),
            BootstrapError::ManifestNotFound { path } => Some(format!(
                "Restore {} from the repository checkout.",
                path.display()
            )),
            BootstrapError::TemplateNotFound { path } => Some(format!(
                "Restore {} from the repository checkout.",
                path.display()
            )),
            _ => None,
        }
    }
}
