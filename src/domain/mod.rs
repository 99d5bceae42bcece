//! Domain logic for nightly-date handling
//!
//! Contains the pure text transforms without any I/O concerns.

mod date;
mod requirements;

pub use date::{DateError, NightlyDate};
pub use requirements::{detect_first_date, is_scoped_line, patch_dates, PatchOutcome};
