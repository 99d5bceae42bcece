//! Scoped-line detection and date patching for requirements files
//!
//! A line is "scoped" when its leading content (after optional whitespace)
//! is `torch==`, `torchvision==`, or `torch_xla`. Note the asymmetry:
//! torch and torchvision must be exact pins, while torch_xla matches with
//! any operator or none. Only scoped lines are eligible for date detection
//! or replacement; everything else passes through untouched.

use regex::Regex;
use std::sync::OnceLock;

use super::NightlyDate;

fn scope_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:torch(?:vision)?==|torch_xla)\b").expect("hard-coded pattern")
    })
}

fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.dev([0-9]{8})").expect("hard-coded pattern"))
}

/// Result of patching a requirements document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The rewritten document text
    pub text: String,
    /// How many `.devYYYYMMDD` tokens were replaced
    pub replaced: usize,
}

/// Returns true if the line is eligible for date detection/patching
pub fn is_scoped_line(line: &str) -> bool {
    scope_line_re().is_match(line)
}

/// Finds the first nightly date on a scoped line, scanning top to bottom.
///
/// A scoped line without a date token does not stop the scan; detection
/// continues on subsequent lines.
pub fn detect_first_date(text: &str) -> Option<NightlyDate> {
    for line in text.lines() {
        if !is_scoped_line(line) {
            continue;
        }
        if let Some(caps) = date_token_re().captures(line) {
            if let Some(m) = caps.get(1) {
                if let Ok(date) = m.as_str().parse() {
                    return Some(date);
                }
            }
        }
    }
    None
}

/// Rewrites every `.devYYYYMMDD` token on scoped lines to the given date.
///
/// Non-scoped lines are preserved byte for byte, line order is unchanged,
/// and the trailing-newline flag of the original text is kept.
pub fn patch_dates(text: &str, date: &NightlyDate) -> PatchOutcome {
    let replacement = format!(".dev{}", date);
    let had_newline = text.ends_with('\n');
    let body = if had_newline {
        &text[..text.len() - 1]
    } else {
        text
    };

    let mut replaced = 0;
    let mut lines = Vec::new();

    for line in body.split('\n') {
        if is_scoped_line(line) {
            let count = date_token_re().find_iter(line).count();
            if count > 0 {
                replaced += count;
                lines.push(
                    date_token_re()
                        .replace_all(line, replacement.as_str())
                        .into_owned(),
                );
                continue;
            }
        }
        lines.push(line.to_string());
    }

    let mut out = lines.join("\n");
    if had_newline {
        out.push('\n');
    }

    PatchOutcome {
        text: out,
        replaced,
    }
}
