use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::consts;
use crate::error::{GenError, Result};

/// Generator config file schema. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub cond: CondConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondConfig {
    /// Longest if/else chain to enumerate
    #[serde(default = "default_branches")]
    pub branches: usize,
    /// Passed through verbatim as `config = "..."` for the inverted cases
    #[serde(default = "default_inverted_config")]
    pub inverted_config: String,
}

impl Default for CondConfig {
    fn default() -> Self {
        Self {
            branches: default_branches(),
            inverted_config: default_inverted_config(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_branches() -> usize {
    consts::cond::BRANCHES
}

fn default_inverted_config() -> String {
    consts::cond::INVERTED_CONFIG.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(consts::output::DEFAULT_DIR)
}

impl GeneratorConfig {
    /// Parse and validate a config file body.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| GenError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from disk, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content, path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let branches = self.cond.branches;
        if !(1..=consts::cond::MAX_BRANCHES).contains(&branches) {
            return Err(GenError::ConfigInvalidValue {
                field: "cond.branches".to_string(),
                reason: format!(
                    "{branches} is outside 1..={}",
                    consts::cond::MAX_BRANCHES
                ),
            });
        }
        if self.cond.inverted_config.is_empty() {
            return Err(GenError::ConfigInvalidValue {
                field: "cond.inverted_config".to_string(),
                reason: "must be a non-empty file name".to_string(),
            });
        }
        Ok(())
    }
}
