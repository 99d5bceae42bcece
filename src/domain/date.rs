//! Nightly build date identifier
//!
//! Nightly builds of torch / torchvision / torch_xla carry a prerelease
//! suffix of the form `.devYYYYMMDD`. The date portion is exactly 8 ASCII
//! digits; no calendar validation is performed beyond that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("expected exactly 8 digits (YYYYMMDD), got '{0}'")]
    InvalidFormat(String),
}

/// An 8-digit nightly build date (YYYYMMDD)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NightlyDate {
    digits: String,
}

impl NightlyDate {
    /// Returns the raw 8-digit date string
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the date formatted as a `.dev` version suffix (without the dot)
    pub fn dev_suffix(&self) -> String {
        format!("dev{}", self.digits)
    }
}

impl fmt::Display for NightlyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for NightlyDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_string()));
        }

        Ok(Self {
            digits: s.to_string(),
        })
    }
}

impl TryFrom<String> for NightlyDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NightlyDate> for String {
    fn from(date: NightlyDate) -> Self {
        date.digits
    }
}
