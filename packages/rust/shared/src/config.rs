//! Generator configuration.
//!
//! No config file is read unless one is passed explicitly with `--config`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MishnahError, Result};

/// Relative path the dataset is written to when nothing overrides it.
pub const DEFAULT_OUTPUT_PATH: &str = "mishnah_full.json";

// ---------------------------------------------------------------------------
// Config structs (matching the TOML schema)
// ---------------------------------------------------------------------------

/// Top-level generator config, deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Where the dataset is written, relative to the working directory.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl GeneratorConfig {
    /// Resolve the output path, letting an explicit override win.
    pub fn output_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output.path.clone())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the generator config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MishnahError::io(path, e))?;

    let config: GeneratorConfig = toml::from_str(&content).map_err(|e| {
        MishnahError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    if config.output.path.as_os_str().is_empty() {
        return Err(MishnahError::config("output.path must not be empty"));
    }

    tracing::debug!(?path, output = %config.output.path.display(), "loaded config");
    Ok(config)
}
