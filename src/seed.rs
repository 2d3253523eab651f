//! Configuration seeding: copy the example template to the live config path
//! if and only if the live file does not already exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

pub const DEFAULT_CONFIG_DIR: &str = "config_prod";
pub const CONFIG_FILE: &str = "app.yaml";
pub const TEMPLATE_FILE: &str = "app.yaml.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Template was copied byte-for-byte; the operator still has to fill in
    /// real values.
    Created,
    /// The live config predates this run and was left untouched.
    AlreadyExists,
}

#[derive(Debug, Clone)]
pub struct ConfigSeed {
    template: PathBuf,
    target: PathBuf,
}

impl ConfigSeed {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            template: config_dir.join(TEMPLATE_FILE),
            target: config_dir.join(CONFIG_FILE),
        }
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Materialize the live config. A missing template is fatal regardless
    /// of whether the target already exists; an existing target is never
    /// overwritten.
    pub fn materialize(&self) -> Result<SeedOutcome> {
        if !self.template.is_file() {
            return Err(BootstrapError::TemplateNotFound {
                path: self.template.clone(),
            });
        }

        if self.target.exists() {
            return Ok(SeedOutcome::AlreadyExists);
        }

        fs::copy(&self.template, &self.target)?;
        Ok(SeedOutcome::Created)
    }
}
