//! Date normalization for the date-range filters.
//!
//! Cells arrive either as ISO dates (`2022-01-31`) or as the spreadsheet
//! style `M/D/Y` (`1/31/22`, `01/31/2022`). Both shapes are rewritten to
//! `YYYY-MM-DD` before parsing, and every comparison normalizes both of its
//! sides through [`parse_date`].

use crate::error::{FrameError, FrameResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const ISO_FORMAT: &str = "%Y-%m-%d";

static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").expect("slash date pattern compiles")
});

/// Rewrite a date string to `YYYY-MM-DD` without validating the calendar.
///
/// Surrounding whitespace is trimmed. Strings without a `/` are otherwise
/// returned unchanged.
///
/// # Errors
/// Returns [`FrameError::DateParseError`] if the string contains `/` but is
/// not of the form `M/D/Y` with a 2- or 4-digit year.
pub fn normalize_date(value: &str) -> FrameResult<String> {
    let value = value.trim();
    if !value.contains('/') {
        return Ok(value.to_string());
    }
    let caps = SLASH_DATE
        .captures(value)
        .ok_or_else(|| FrameError::date(value, "expected M/D/Y"))?;

    let month = &caps[1];
    let day = &caps[2];
    let year = &caps[3];
    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };
    Ok(format!("{year}-{month:0>2}-{day:0>2}"))
}

/// Parse a date string after [`normalize_date`].
///
/// # Errors
/// Returns [`FrameError::DateParseError`] when the normalized string is not
/// a valid calendar date.
pub fn parse_date(value: &str) -> FrameResult<NaiveDate> {
    let normalized = normalize_date(value)?;
    NaiveDate::parse_from_str(&normalized, ISO_FORMAT)
        .map_err(|e| FrameError::date(value, e.to_string()))
}
