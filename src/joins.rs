//! Key-based merges and frame concatenation.
//!
//! Both merges index the right frame in a `HashMap` keyed by the primary
//! key value and then walk the left frame once, so the cost is linear in
//! the size of both inputs.
//!
//! ## Available operations
//! - [`DataFrame::merge`] - widen the left frame in place with right columns
//! - [`DataFrame::inner_merge`] - new frame of matching rows only
//! - [`DataFrame::concat_frames`] - stack two frames with identical columns
//!
//! ### Notes
//! - `merge` resolves duplicate right keys to the **last** matching row,
//!   `inner_merge` to the **first**.
//! - `merge` validates everything before touching the left frame, so a failed
//!   merge leaves it unchanged.

use crate::error::{FrameError, FrameResult};
use crate::frame::{ColumnIndex, DataFrame};
use crate::row::Record;
use std::collections::{HashMap, HashSet};

/// Keys that never take part in an inner merge.
fn is_missing_key(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("null")
}

impl DataFrame {
    /// Import columns from `right` into this frame, matching rows on
    /// `primary_key`.
    ///
    /// With an empty `columns` every right column except the key is
    /// imported. Left rows without a match get `""` in the new columns. When
    /// the right frame repeats a key, the last row with that key wins.
    ///
    /// # Errors
    /// - [`FrameError::ColumnNotFound`] if the key is missing from either
    ///   frame or a named column is missing from `right`.
    /// - [`FrameError::DuplicateColumn`] if a name is listed twice or an
    ///   imported column already exists on the left.
    pub fn merge<S: AsRef<str>>(
        &mut self,
        right: &DataFrame,
        primary_key: &str,
        columns: &[S],
    ) -> FrameResult<()> {
        let left_key = self.column_index().require(primary_key)?;
        let right_key = right.column_index().require(primary_key)?;

        let imported: Vec<&str> = if columns.is_empty() {
            right
                .columns()
                .iter()
                .map(String::as_str)
                .filter(|c| *c != primary_key)
                .collect()
        } else {
            let mut seen = HashSet::new();
            let mut named = Vec::with_capacity(columns.len());
            for name in columns.iter().map(AsRef::as_ref) {
                if name == primary_key {
                    continue;
                }
                if !seen.insert(name) {
                    return Err(FrameError::DuplicateColumn(name.to_string()));
                }
                named.push(name);
            }
            named
        };

        let mut right_positions = Vec::with_capacity(imported.len());
        for name in &imported {
            right_positions.push(right.column_index().require(name)?);
            if self.has_column(name) {
                return Err(FrameError::DuplicateColumn((*name).to_string()));
            }
        }

        // Later rows overwrite earlier ones.
        let lookup: HashMap<&str, &Record> = right
            .records()
            .iter()
            .map(|r| (r.values()[right_key].as_str(), r))
            .collect();

        let base = self.column_count();
        for name in &imported {
            self.new_field(name)?;
        }
        for record in self.records_mut() {
            let Some(found) = lookup.get(record.values()[left_key].as_str()).copied() else {
                continue;
            };
            let values = record.values_mut();
            for (offset, &pos) in right_positions.iter().enumerate() {
                values[base + offset].clone_from(&found.values()[pos]);
            }
        }

        tracing::debug!(
            key = primary_key,
            columns = imported.len(),
            "merged columns into frame"
        );
        Ok(())
    }

    /// Join with `right` on `primary_key`, keeping only left rows that have a
    /// match.
    ///
    /// Output columns are the left columns followed by the right columns
    /// minus the key. Every matching left row produces one output row, joined
    /// to the first right row with that key. Left rows whose key is empty,
    /// `nan` or `null` (any case) are skipped.
    ///
    /// # Errors
    /// - [`FrameError::ColumnNotFound`] if the key is missing from either
    ///   frame.
    /// - [`FrameError::DuplicateColumn`] if a right column other than the
    ///   key also exists on the left.
    pub fn inner_merge(&self, right: &DataFrame, primary_key: &str) -> FrameResult<DataFrame> {
        let left_key = self.column_index().require(primary_key)?;
        let right_key = right.column_index().require(primary_key)?;

        let right_positions: Vec<usize> = (0..right.column_count())
            .filter(|&p| p != right_key)
            .collect();
        let mut names = self.columns().to_vec();
        for &pos in &right_positions {
            let name = &right.columns()[pos];
            if self.has_column(name) {
                return Err(FrameError::DuplicateColumn(name.clone()));
            }
            names.push(name.clone());
        }

        let mut lookup: HashMap<&str, &Record> = HashMap::new();
        for record in right.records() {
            lookup
                .entry(record.values()[right_key].as_str())
                .or_insert(record);
        }

        let mut out = DataFrame::with_index(ColumnIndex::new(names)?);
        for record in self.records() {
            let key = record.values()[left_key].as_str();
            if is_missing_key(key) {
                continue;
            }
            let Some(found) = lookup.get(key) else {
                continue;
            };
            let mut values = Vec::with_capacity(out.column_count());
            values.extend_from_slice(record.values());
            values.extend(right_positions.iter().map(|&p| found.values()[p].clone()));
            out.push_record(Record::new(values));
        }
        Ok(out)
    }

    /// A new frame holding this frame's rows followed by `other`'s.
    ///
    /// # Errors
    /// - [`FrameError::ColumnCountMismatch`] if the frames differ in width.
    /// - [`FrameError::ColumnOrderMismatch`] at the first position whose
    ///   column names differ.
    pub fn concat_frames(&self, other: &DataFrame) -> FrameResult<DataFrame> {
        if self.column_count() != other.column_count() {
            return Err(FrameError::ColumnCountMismatch {
                left: self.column_count(),
                right: other.column_count(),
            });
        }
        if let Some((position, (left, right))) = self
            .columns()
            .iter()
            .zip(other.columns())
            .enumerate()
            .find(|(_, (l, r))| l != r)
        {
            return Err(FrameError::ColumnOrderMismatch {
                position,
                left: left.clone(),
                right: right.clone(),
            });
        }

        let mut out = self.copy();
        out.records_mut().extend_from_slice(other.records());
        Ok(out)
    }
}
