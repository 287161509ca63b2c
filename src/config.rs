// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use log::{debug, warn};
use serde_json::Value;

use crate::errors::AlignError;

pub const CONFIG_FILE_NAME: &str = ".nwalignconfig";

// About 5000 x 5000 residues, i.e. ~125 MB of scores and directions.
pub const DEFAULT_MAX_CELLS: u64 = 25_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(name = "text")]
    #[clap(alias = "t")]
    Text,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignerConfig {
    // None => no ceiling on the score matrix size
    pub max_cells: Option<u64>,
    pub output: OutputFormat,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        AlignerConfig {
            max_cells: Some(DEFAULT_MAX_CELLS),
            output: OutputFormat::Text,
        }
    }
}

impl AlignerConfig {
    // Missing or ill-typed keys keep their default.
    pub fn from_value(value: &Value) -> Self {
        let mut config = AlignerConfig::default();
        match value.get("max_cells") {
            None => {}
            Some(Value::Null) => config.max_cells = None,
            Some(v) => match v.as_u64() {
                Some(0) => config.max_cells = None,
                Some(n) => config.max_cells = Some(n),
                None => warn!("Ignoring max_cells: expected a non-negative integer, got {}", v),
            },
        }
        if let Some(v) = value.get("output") {
            match v.as_str().map(|s| OutputFormat::from_str(s, true)) {
                Some(Ok(output)) => config.output = output,
                _ => warn!("Ignoring output: expected \"text\" or \"json\", got {}", v),
            }
        }
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, AlignError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| AlignError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Read config from {}", path.display());
        Ok(Self::from_value(&value))
    }

    /// Rejects inputs whose score matrix would exceed `max_cells`.
    pub fn check_size(&self, len_a: usize, len_b: usize) -> Result<(), AlignError> {
        let cells = (len_a as u64 + 1).saturating_mul(len_b as u64 + 1);
        match self.max_cells {
            Some(max) if cells > max => Err(AlignError::TooLarge { cells, max }),
            _ => Ok(()),
        }
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
