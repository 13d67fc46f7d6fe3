//! On-disk configuration for the CLI, one table per component.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use asmview_compilation::pipeline::ToolchainOptions;
use asmview_lean4::Lean4Options;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub lean4: Lean4Options,
    pub toolchain: ToolchainOptions,
}

/// Loads the config file, or the (env-var-seeded) defaults when none given.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}
