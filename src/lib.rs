//! tpu-nightly - Manage the nightly date pinned in a TPU requirements file
//!
//! CI keeps torch, torchvision, and torch_xla aligned on the same nightly
//! build by pinning `.devYYYYMMDD` prerelease suffixes in a requirements
//! file. This crate either rewrites those suffixes to a caller-supplied
//! date or reports the first date already present, and emits a small JSON
//! record either way.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{detect_first_date, patch_dates, NightlyDate, PatchOutcome};
