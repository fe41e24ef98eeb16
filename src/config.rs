//! Optional YAML configuration.
//!
//! A `.scan-gate.yaml` in the working directory (or a file passed via
//! `--config`) supplies defaults for the gate; CLI flags override it.
//!
//! ```yaml
//! ignore_warnings: true
//! format: json
//! short: false
//! level: warn
//! ```

use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".scan-gate.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Do not fail the gate on WARN findings
    pub ignore_warnings: bool,
    /// Output format: "terminal" or "json"
    pub format: Option<String>,
    /// Short report: hide PASS findings and evidence URLs
    pub short: bool,
    /// Minimum severity to include in the report: "pass", "warn", "fail"
    pub level: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GateError::ConfigReadError {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| GateError::ConfigParseError {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `.scan-gate.yaml` from `dir` if one exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }
}
