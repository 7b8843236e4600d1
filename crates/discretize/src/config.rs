use crate::{BinError, VectorBinner};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid binner config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("binner config has no axes")]
    Empty,
    #[error(transparent)]
    Bin(#[from] BinError),
}

/// JSON description of a binner.
///
/// ```json
/// { "axes": [ { "name": "x", "intervals": 4, "low": 0.0, "high": 8.0 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnerConfig {
    pub axes: Vec<AxisConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub intervals: usize,
    pub low: f32,
    pub high: f32,
}

impl BinnerConfig {
    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// for malformed JSON, [`ConfigError::Empty`] for a config without axes.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        json.parse()
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Display name of axis `dim`: its configured name or `axis{dim}`.
    #[must_use]
    pub fn axis_name(&self, dim: usize) -> String {
        self.axes
            .get(dim)
            .and_then(|axis| axis.name.clone())
            .unwrap_or_else(|| format!("axis{dim}"))
    }

    /// Builds the binner this config describes.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Bin`] if an axis is invalid.
    pub fn build(&self) -> Result<VectorBinner, ConfigError> {
        Ok(VectorBinner::from_config(self)?)
    }
}

impl FromStr for BinnerConfig {
    type Err = ConfigError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let config: Self = serde_json::from_str(json)?;
        if config.axes.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(config)
    }
}
