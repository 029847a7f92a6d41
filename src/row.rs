//! Records and the row handles used to read and update them by column name.
//!
//! A [`Record`] is just the ordered values of one row. It does not know its
//! own schema: the handles ([`Row`], [`RowMut`], and the streaming
//! [`StreamingRecord`](crate::io::stream::StreamingRecord)) pair a record with
//! a borrowed [`ColumnIndex`] so values can be addressed by name without the
//! index ever being copied per row.

use crate::date::parse_date;
use crate::error::{FrameError, FrameResult};
use crate::frame::ColumnIndex;
use chrono::NaiveDate;

/// One row's values in column-position order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<String> {
        &mut self.values
    }
}

/// Name-based access to a row's values.
///
/// Implementors only provide the index and the raw values; lookups and
/// conversions are shared.
pub trait FieldAccess {
    fn column_index(&self) -> &ColumnIndex;

    fn values(&self) -> &[String];

    /// Return the value of `field`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `field` is not a column.
    fn val(&self, field: &str) -> FrameResult<&str> {
        let pos = self.column_index().require(field)?;
        let values = self.values();
        values
            .get(pos)
            .map(String::as_str)
            .ok_or(FrameError::ShapeMismatch {
                expected: self.column_index().len(),
                found: values.len(),
            })
    }

    /// Parse `field` as `f64`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] or [`FrameError::ConversionError`].
    fn convert_to_float(&self, field: &str) -> FrameResult<f64> {
        let raw = self.val(field)?;
        parse_float(raw).ok_or_else(|| FrameError::conversion(field, raw, "f64"))
    }

    /// Parse `field` as `i64`. Accepts an optional sign and the `0x`, `0o`
    /// and `0b` radix prefixes.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] or [`FrameError::ConversionError`].
    fn convert_to_int(&self, field: &str) -> FrameResult<i64> {
        let raw = self.val(field)?;
        parse_int(raw).ok_or_else(|| FrameError::conversion(field, raw, "i64"))
    }

    /// Parse `field` as a date, see [`parse_date`].
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] or [`FrameError::DateParseError`].
    fn convert_to_date(&self, field: &str) -> FrameResult<NaiveDate> {
        parse_date(self.val(field)?)
    }
}

/// Read-only handle to a row of a [`DataFrame`](crate::DataFrame).
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    values: &'a [String],
    index: &'a ColumnIndex,
}

impl<'a> Row<'a> {
    pub(crate) fn new(values: &'a [String], index: &'a ColumnIndex) -> Self {
        Self { values, index }
    }

    /// Copy the row's values into an owned [`Record`].
    pub fn to_record(&self) -> Record {
        Record::new(self.values.to_vec())
    }
}

impl FieldAccess for Row<'_> {
    fn column_index(&self) -> &ColumnIndex {
        self.index
    }

    fn values(&self) -> &[String] {
        self.values
    }
}

/// Mutable handle to a row of a [`DataFrame`](crate::DataFrame).
///
/// Only cell values can change through this handle; the row's width is
/// fixed by its frame.
#[derive(Debug)]
pub struct RowMut<'a> {
    values: &'a mut [String],
    index: &'a ColumnIndex,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(values: &'a mut [String], index: &'a ColumnIndex) -> Self {
        Self { values, index }
    }

    /// Overwrite the value of `field`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `field` is not a column.
    pub fn update(&mut self, field: &str, value: impl Into<String>) -> FrameResult<()> {
        let pos = self.index.require(field)?;
        let width = self.values.len();
        let cell = self.values.get_mut(pos).ok_or(FrameError::ShapeMismatch {
            expected: self.index.len(),
            found: width,
        })?;
        *cell = value.into();
        Ok(())
    }
}

impl FieldAccess for RowMut<'_> {
    fn column_index(&self) -> &ColumnIndex {
        self.index
    }

    fn values(&self) -> &[String] {
        self.values
    }
}

pub(crate) fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    // Parse the magnitude as u64 so that i64::MIN round-trips.
    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}
