use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::manifest::DEFAULT_MANIFEST;
use crate::seed::DEFAULT_CONFIG_DIR;
use crate::venv::DEFAULT_ENV_DIR;

/// Optional overrides loaded from `bootstrap.toml` or `.bootstraprc`.
/// Every field falls back to the fixed deployment-layout default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Explicit interpreter command, bypassing candidate probing.
    pub runtime: Option<String>,
    /// Virtual environment root.
    pub env_dir: Option<PathBuf>,
    /// Dependency manifest path.
    pub manifest: Option<PathBuf>,
    /// Directory holding the config template and live config.
    pub config_dir: Option<PathBuf>,
}

impl BootstrapConfig {
    /// Search for a config file in the current directory and ancestors.
    /// Checks `bootstrap.toml`, then `.bootstraprc` (TOML format).
    pub fn discover() -> Self {
        let cwd = std::env::current_dir().ok();
        let cwd = match cwd {
            Some(ref p) => p.as_path(),
            None => return Self::default(),
        };

        for dir in cwd.ancestors() {
            for name in &["bootstrap.toml", ".bootstraprc"] {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    if let Ok(config) = Self::load(&candidate) {
                        return config;
                    }
                }
            }
        }

        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&content).map_err(|e| format!("invalid config in {}: {e}", path.display()))
    }

    pub fn env_dir(&self) -> PathBuf {
        self.env_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_DIR))
    }

    pub fn manifest(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    pub fn config_dir(&self) -> PathBuf {
        self.config_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
    }
}
