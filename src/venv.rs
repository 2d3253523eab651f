//! Virtual environment provisioning and dependency installation.
//!
//! All package operations run through the environment's own interpreter
//! (`venv/bin/python -m pip ...`) so nothing leaks into the system site
//! packages. There is no activation step to get wrong: a created environment
//! whose private interpreter is missing counts as a creation failure.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BootstrapError, Result};
use crate::manifest::DependencyManifest;
use crate::runtime::RuntimeDescriptor;

pub const DEFAULT_ENV_DIR: &str = "venv";

#[derive(Debug, Clone)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Create a virtual environment at `root` using the discovered runtime.
    /// Fatal on a non-zero exit from `python -m venv`; never retried.
    pub fn create(runtime: &RuntimeDescriptor, root: &Path) -> Result<Self> {
        let output = Command::new(&runtime.command)
            .arg("-m")
            .arg("venv")
            .arg(root)
            .output()
            .map_err(|err| BootstrapError::EnvironmentCreation {
                dir: root.to_path_buf(),
                reason: format!("failed to invoke {}: {err}", runtime.command.display()),
            })?;

        if !output.status.success() {
            return Err(BootstrapError::EnvironmentCreation {
                dir: root.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let env = Self {
            root: root.to_path_buf(),
        };
        if !env.interpreter().is_file() {
            return Err(BootstrapError::EnvironmentCreation {
                dir: root.to_path_buf(),
                reason: format!(
                    "environment created but {} is missing",
                    env.interpreter().display()
                ),
            });
        }
        Ok(env)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the environment's private interpreter.
    pub fn interpreter(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts").join("python.exe")
        } else {
            self.root.join("bin").join("python")
        }
    }

    /// Upgrade pip inside the environment, then install the manifest.
    /// pip's diagnostics are surfaced unmodified on failure.
    pub fn install(&self, manifest: &DependencyManifest) -> Result<()> {
        self.run_pip(
            &["install", "--upgrade", "pip"],
            "upgrading pip".to_string(),
        )?;
        let manifest_arg = manifest.path().to_string_lossy().into_owned();
        self.run_pip(
            &["install", "-r", manifest_arg.as_str()],
            format!("installing {}", manifest.path().display()),
        )
    }

    fn run_pip(&self, args: &[&str], context: String) -> Result<()> {
        let output = Command::new(self.interpreter())
            .arg("-m")
            .arg("pip")
            .args(args)
            .output()
            .map_err(|err| BootstrapError::DependencyInstall {
                context: context.clone(),
                stderr: err.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BootstrapError::DependencyInstall {
                context,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
