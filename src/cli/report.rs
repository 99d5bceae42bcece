//! Result record and side-file emission
//!
//! Every successful run produces one JSON record describing the nightly
//! date and whether the requirements file was patched. CI jobs consume it
//! from stdout or from `--json-out`; `--out-env` additionally writes a
//! shell-sourceable exports file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::NightlyDate;

/// Environment variable exported by `--out-env`
pub const ENV_VAR: &str = "VLLM_NIGHTLY_DATE";

/// The JSON result record
///
/// Fields are declared in key-sorted order; `serde_json` preserves
/// declaration order, so the rendered output is key-sorted.
#[derive(Debug, Serialize)]
pub struct NightlyReport {
    file: String,
    nightly_date: String,
    patched: bool,
}

impl NightlyReport {
    pub fn new(file: &Path, date: &NightlyDate, patched: bool) -> Self {
        Self {
            file: file.display().to_string(),
            nightly_date: date.dev_suffix(),
            patched,
        }
    }

    /// Renders the record as indented JSON (no trailing newline)
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize result record")
    }

    /// Writes the rendered record, newline-terminated, to a file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let rendered = self.render()?;
        fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("Failed to write JSON result: {}", path.display()))
    }
}

/// Writes the one-line shell exports file for `--out-env`
pub fn write_env_file(path: &Path, date: &NightlyDate) -> Result<()> {
    fs::write(path, format!("export {}=\"{}\"\n", ENV_VAR, date))
        .with_context(|| format!("Failed to write env file: {}", path.display()))
}
