//! Atomic file replacement
//!
//! Writes go to a temporary sibling first, then rename over the target.
//! Readers either see the old content or the new content, never a
//! partially written file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Returns the temporary sibling path used during an atomic write
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Persists `contents` to `path` via write-to-temp-then-rename
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_sibling(path);

    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))
}
