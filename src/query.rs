//! Row filters, column projection and sorting.
//!
//! Every filter walks the frame once, preserves row order and copies the
//! selected records into a new frame with the same columns. Projections
//! build a new column index. [`DataFrame::sort`] is the only operation here
//! that works in place.

use crate::date::parse_date;
use crate::error::FrameResult;
use crate::frame::{ColumnIndex, DataFrame};
use crate::row::{FieldAccess, Record, Row, parse_float};
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::HashSet;

impl DataFrame {
    /// Copy the rows for which `keep` returns `Ok(true)`, stopping at the
    /// first error.
    fn select_rows<F>(&self, mut keep: F) -> FrameResult<DataFrame>
    where
        F: FnMut(&Row<'_>) -> FrameResult<bool>,
    {
        let mut out = self.empty_like();
        for row in self.rows() {
            if keep(&row)? {
                out.push_record(row.to_record());
            }
        }
        Ok(out)
    }

    /// Keep rows whose `field` value is one of `values`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) if `field` is not a column.
    pub fn filtered<S: AsRef<str>>(&self, field: &str, values: &[S]) -> FrameResult<DataFrame> {
        self.membership_filter(field, values, true)
    }

    /// Drop rows whose `field` value is one of `values`; the complement of
    /// [`filtered`](Self::filtered).
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) if `field` is not a column.
    pub fn exclude<S: AsRef<str>>(&self, field: &str, values: &[S]) -> FrameResult<DataFrame> {
        self.membership_filter(field, values, false)
    }

    fn membership_filter<S: AsRef<str>>(
        &self,
        field: &str,
        values: &[S],
        keep_members: bool,
    ) -> FrameResult<DataFrame> {
        let pos = self.column_index().require(field)?;
        let wanted: HashSet<&str> = values.iter().map(AsRef::as_ref).collect();
        self.select_rows(|row| Ok(wanted.contains(row.values()[pos].as_str()) == keep_members))
    }

    /// Keep rows whose numeric `field` is `>= threshold`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound), or [`FrameError::ConversionError`](crate::FrameError::ConversionError) on
    /// the first non-numeric cell.
    pub fn greater_than_or_equal_to(&self, field: &str, threshold: f64) -> FrameResult<DataFrame> {
        self.column_index().require(field)?;
        self.select_rows(|row| Ok(row.convert_to_float(field)? >= threshold))
    }

    /// Keep rows whose numeric `field` is `<= threshold`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound), or [`FrameError::ConversionError`](crate::FrameError::ConversionError) on
    /// the first non-numeric cell.
    pub fn less_than_or_equal_to(&self, field: &str, threshold: f64) -> FrameResult<DataFrame> {
        self.column_index().require(field)?;
        self.select_rows(|row| Ok(row.convert_to_float(field)? <= threshold))
    }

    /// Keep rows dated strictly after `date`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) or [`FrameError::DateParseError`](crate::FrameError::DateParseError).
    pub fn filtered_after(&self, field: &str, date: &str) -> FrameResult<DataFrame> {
        let after = parse_date(date)?;
        self.date_filter(field, |d| d > after)
    }

    /// Keep rows dated strictly before `date`.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) or [`FrameError::DateParseError`](crate::FrameError::DateParseError).
    pub fn filtered_before(&self, field: &str, date: &str) -> FrameResult<DataFrame> {
        let before = parse_date(date)?;
        self.date_filter(field, |d| d < before)
    }

    /// Keep rows dated strictly between `start` and `end`. Rows falling on
    /// either boundary are excluded.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) or [`FrameError::DateParseError`](crate::FrameError::DateParseError).
    pub fn filtered_between(&self, field: &str, start: &str, end: &str) -> FrameResult<DataFrame> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        self.date_filter(field, |d| d > start && d < end)
    }

    fn date_filter<F>(&self, field: &str, keep: F) -> FrameResult<DataFrame>
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.column_index().require(field)?;
        self.select_rows(|row| Ok(keep(row.convert_to_date(field)?)))
    }

    /// A new frame with only `columns`, in the given order.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) for an unknown name,
    /// [`FrameError::DuplicateColumn`](crate::FrameError::DuplicateColumn) if a name is listed twice.
    pub fn keep_columns<S: AsRef<str>>(&self, columns: &[S]) -> FrameResult<DataFrame> {
        let positions = columns
            .iter()
            .map(|c| self.column_index().require(c.as_ref()))
            .collect::<FrameResult<Vec<_>>>()?;
        let index = ColumnIndex::new(columns.iter().map(|c| c.as_ref().to_string()))?;

        let mut out = DataFrame::with_index(index);
        for record in self.records() {
            let values = record.values();
            out.push_record(Record::new(
                positions.iter().map(|&p| values[p].clone()).collect(),
            ));
        }
        Ok(out)
    }

    /// A new frame without `columns`. Names that are not columns are
    /// ignored.
    ///
    /// # Errors
    /// Never fails in practice; the `Result` mirrors
    /// [`keep_columns`](Self::keep_columns).
    pub fn remove_columns<S: AsRef<str>>(&self, columns: &[S]) -> FrameResult<DataFrame> {
        let drop: HashSet<&str> = columns.iter().map(AsRef::as_ref).collect();
        let keep: Vec<&str> = self
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| !drop.contains(c))
            .collect();
        self.keep_columns(&keep)
    }

    /// Sort rows in place by `field`.
    ///
    /// Values are compared numerically when every value in the column parses
    /// as a number, otherwise as strings. The sort is stable.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`](crate::FrameError::ColumnNotFound) if `field` is not a column.
    pub fn sort(&mut self, field: &str, ascending: bool) -> FrameResult<()> {
        let pos = self.column_index().require(field)?;
        let numeric = self.numeric_column(field)?;

        let directed = |ord: Ordering| if ascending { ord } else { ord.reverse() };
        let records = self.records_mut();
        if numeric {
            // Every cell parsed in numeric_column, so the fallback is unreachable.
            let key = |r: &Record| OrderedFloat(parse_float(&r.values()[pos]).unwrap_or(f64::NAN));
            records.sort_by(|a, b| directed(key(a).cmp(&key(b))));
        } else {
            records.sort_by(|a, b| directed(a.values()[pos].cmp(&b.values()[pos])));
        }
        Ok(())
    }
}
