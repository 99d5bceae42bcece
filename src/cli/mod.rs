//! Command-line interface
//!
//! Argument parsing, orchestration, and the exit-code contract:
//! 0 on success, 1 for invalid input (bad `--set-date`, or no date found
//! in detect mode), 2 when the requirements file does not exist.

pub mod report;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use thiserror::Error;

use crate::domain::{self, DateError, NightlyDate};
use crate::storage;
use report::NightlyReport;

/// Errors that terminate a run, each mapped to a process exit code
#[derive(Debug, Error)]
pub enum CliError {
    #[error("--set-date must be YYYYMMDD")]
    InvalidDate(#[from] DateError),

    #[error("no .devYYYYMMDD found on torch/torchvision/torch_xla lines")]
    NoDateFound,

    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidDate(_) | Self::NoDateFound | Self::Other(_) => 1,
            Self::FileNotFound(_) => 2,
        }
    }
}

#[derive(Parser)]
#[command(name = "tpu-nightly")]
#[command(author, version, about = "Normalize or read the nightly date in a TPU requirements file")]
pub struct Cli {
    /// Path to the TPU requirements file
    #[arg(long, default_value = "requirements/tpu.txt")]
    pub file: PathBuf,

    /// YYYYMMDD nightly date to set across the file
    #[arg(long, value_name = "YYYYMMDD")]
    pub set_date: Option<String>,

    /// Write a shell exports file (e.g. /tmp/vllm_tpu.env) containing VLLM_NIGHTLY_DATE
    #[arg(long, value_name = "PATH")]
    pub out_env: Option<PathBuf>,

    /// Write the JSON result to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Do not modify the requirements file even if --set-date is given
    #[arg(long)]
    pub no_write: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<(), CliError> {
    execute(&Cli::parse())
}

/// Runs one invocation against already-parsed arguments
pub fn execute(cli: &Cli) -> Result<(), CliError> {
    // Validate before any file access, so a bad date never touches disk.
    let set_date = cli
        .set_date
        .as_deref()
        .map(str::parse::<NightlyDate>)
        .transpose()?;

    let text = match fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::FileNotFound(cli.file.clone()));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read {}", cli.file.display()))
                .into());
        }
    };

    let (nightly, patched) = match set_date {
        Some(date) => {
            let outcome = domain::patch_dates(&text, &date);
            if !cli.no_write && outcome.text != text {
                storage::write_atomic(&cli.file, &outcome.text)
                    .with_context(|| format!("Failed to update {}", cli.file.display()))?;
            }
            (date, outcome.replaced > 0)
        }
        None => {
            let date = domain::detect_first_date(&text).ok_or(CliError::NoDateFound)?;
            (date, false)
        }
    };

    if let Some(env_path) = &cli.out_env {
        report::write_env_file(env_path, &nightly)?;
    }

    let result = NightlyReport::new(&cli.file, &nightly, patched);
    match &cli.json_out {
        Some(path) => result.write_to(path)?,
        None => println!("{}", result.render()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(file: PathBuf) -> Cli {
        Cli {
            file,
            set_date: None,
            out_env: None,
            json_out: None,
            no_write: false,
        }
    }

    #[test]
    fn missing_file_maps_to_exit_code_2() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(dir.path().join("absent.txt"));

        let err = execute(&cli).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_date_maps_to_exit_code_1_before_file_access() {
        let dir = TempDir::new().unwrap();
        // The file deliberately does not exist: validation fires first,
        // so the error is InvalidDate rather than FileNotFound.
        let mut cli = cli_for(dir.path().join("absent.txt"));
        cli.set_date = Some("2024031".to_string());

        let err = execute(&cli).unwrap_err();
        assert!(matches!(err, CliError::InvalidDate(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn detect_failure_maps_to_exit_code_1() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tpu.txt");
        fs::write(&path, "numpy==1.26.0\n").unwrap();

        let err = execute(&cli_for(path)).unwrap_err();
        assert!(matches!(err, CliError::NoDateFound));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn patch_mode_rewrites_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tpu.txt");
        fs::write(&path, "torch==2.5.0.dev20240101\nnumpy==1.26.0\n").unwrap();

        let mut cli = cli_for(path.clone());
        cli.set_date = Some("20240315".to_string());
        cli.json_out = Some(dir.path().join("result.json"));
        execute(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "torch==2.5.0.dev20240315\nnumpy==1.26.0\n"
        );
    }

    #[test]
    fn no_write_leaves_the_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tpu.txt");
        let original = "torch==2.5.0.dev20240101\n";
        fs::write(&path, original).unwrap();

        let mut cli = cli_for(path.clone());
        cli.set_date = Some("20240315".to_string());
        cli.no_write = true;
        cli.json_out = Some(dir.path().join("result.json"));
        execute(&cli).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        // The report still reflects the patch that would have been applied.
        let result: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("result.json")).unwrap())
                .unwrap();
        assert_eq!(result["nightly_date"], "dev20240315");
        assert_eq!(result["patched"], true);
    }

    #[test]
    fn patch_with_no_matches_reports_unpatched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tpu.txt");
        fs::write(&path, "numpy==1.26.0\n").unwrap();

        let mut cli = cli_for(path);
        cli.set_date = Some("20240315".to_string());
        cli.json_out = Some(dir.path().join("result.json"));
        execute(&cli).unwrap();

        let result: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("result.json")).unwrap())
                .unwrap();
        assert_eq!(result["patched"], false);
    }
}
