//! Dependency manifest handling.
//!
//! The manifest is opaque to the bootstrapper: pip consumes the file itself
//! via `-r`. It is read here only to fail early when absent and to report how
//! many specifiers are about to be installed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

pub const DEFAULT_MANIFEST: &str = "requirements_prod.txt";

#[derive(Debug, Clone)]
pub struct DependencyManifest {
    path: PathBuf,
    specifiers: Vec<String>,
}

impl DependencyManifest {
    /// Load the manifest, failing with `ManifestNotFound` if the file is
    /// absent. No partial install is attempted in that case.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BootstrapError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let specifiers = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            specifiers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package specifiers in file order, comments and blank lines skipped.
    pub fn specifiers(&self) -> &[String] {
        &self.specifiers
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }
}
