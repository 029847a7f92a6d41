//! The [`DataFrame`] type and its column index.
//!
//! A frame is an ordered `Vec` of [`Record`]s plus one [`ColumnIndex`]. The
//! index keeps the ordered column names as its source of truth and derives a
//! name→position map from them, so rebuilding the column order is a slice
//! borrow rather than a scan over the map. Structural changes (adding or
//! renaming columns) go through the index and keep both views in sync.

use crate::error::{FrameError, FrameResult};
use crate::row::{Record, Row, RowMut, parse_float};
use std::collections::{HashMap, HashSet};

/// Ordered column names with a derived name→position lookup.
///
/// Positions are always exactly `0..len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build an index assigning position `i` to the `i`-th name.
    ///
    /// # Errors
    /// [`FrameError::DuplicateColumn`] if a name repeats.
    pub fn new<I, S>(names: I) -> FrameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for name in names {
            index.push(name.into())?;
        }
        Ok(index)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position of `name`, or [`FrameError::ColumnNotFound`].
    pub fn require(&self, name: &str) -> FrameResult<usize> {
        self.position(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    pub(crate) fn push(&mut self, name: String) -> FrameResult<usize> {
        if self.positions.contains_key(&name) {
            return Err(FrameError::DuplicateColumn(name));
        }
        let pos = self.names.len();
        self.positions.insert(name.clone(), pos);
        self.names.push(name);
        Ok(pos)
    }

    pub(crate) fn rename(&mut self, old: &str, new: &str) -> FrameResult<()> {
        let pos = self.require(old)?;
        if self.contains(new) {
            return Err(FrameError::DuplicateColumn(new.to_string()));
        }
        self.positions.remove(old);
        self.positions.insert(new.to_string(), pos);
        self.names[pos] = new.to_string();
        Ok(())
    }
}

/// An in-memory table of string cells addressed by column name.
///
/// Row order is insertion order and every operation preserves it unless
/// documented otherwise. Query operations return new frames holding owned
/// copies of the selected records; only [`add_record`](Self::add_record),
/// [`new_field`](Self::new_field), [`rename`](Self::rename),
/// [`sort`](Self::sort), [`merge`](Self::merge) and [`RowMut::update`]
/// mutate a frame in place.
///
/// # Example
///
/// ```
/// use csvframe::{DataFrame, FieldAccess};
///
/// # fn main() -> csvframe::FrameResult<()> {
/// let mut df = DataFrame::new(["ID", "Cost"])?;
/// df.add_record(&["1", "818"])?;
/// df.add_record(&["2", "777"])?;
///
/// let cheap = df.less_than_or_equal_to("Cost", 800.0)?;
/// assert_eq!(cheap.count_records(), 1);
/// assert_eq!(cheap.row(0).unwrap().val("ID")?, "2");
/// assert_eq!(df.sum("Cost")?, 1595.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataFrame {
    index: ColumnIndex,
    records: Vec<Record>,
}

impl DataFrame {
    /// Create an empty frame with the given columns.
    ///
    /// # Errors
    /// [`FrameError::DuplicateColumn`] if a column name repeats.
    pub fn new<I, S>(columns: I) -> FrameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_index(ColumnIndex::new(columns)?))
    }

    pub(crate) fn with_index(index: ColumnIndex) -> Self {
        Self {
            index,
            records: Vec::new(),
        }
    }

    /// A frame with the same columns and no records.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_index(self.index.clone())
    }

    /// Push an owned record whose width the caller has already checked.
    pub(crate) fn push_record(&mut self, record: Record) {
        debug_assert_eq!(record.len(), self.index.len());
        self.records.push(record);
    }

    /// Append a record built from a copy of `values`.
    ///
    /// # Errors
    /// [`FrameError::ShapeMismatch`] if `values.len()` differs from the
    /// column count.
    pub fn add_record<S: AsRef<str>>(&mut self, values: &[S]) -> FrameResult<()> {
        if values.len() != self.index.len() {
            return Err(FrameError::ShapeMismatch {
                expected: self.index.len(),
                found: values.len(),
            });
        }
        self.records.push(Record::new(
            values.iter().map(|v| v.as_ref().to_string()).collect(),
        ));
        Ok(())
    }

    /// Builder form of [`add_record`](Self::add_record).
    ///
    /// # Errors
    /// See [`add_record`](Self::add_record).
    pub fn with_record<S: AsRef<str>>(mut self, values: &[S]) -> FrameResult<Self> {
        self.add_record(values)?;
        Ok(self)
    }

    pub fn count_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names in position order.
    pub fn columns(&self) -> &[String] {
        self.index.names()
    }

    pub fn column_count(&self) -> usize {
        self.index.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.position(name)
    }

    pub fn column_index(&self) -> &ColumnIndex {
        &self.index
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// A decoupled copy: same columns, every record duplicated.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        let index = &self.index;
        self.records
            .iter()
            .map(move |r| Row::new(r.values(), index))
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = RowMut<'_>> + '_ {
        let index = &self.index;
        self.records
            .iter_mut()
            .map(move |r| RowMut::new(r.values_mut(), index))
    }

    pub fn row(&self, i: usize) -> Option<Row<'_>> {
        self.records.get(i).map(|r| Row::new(r.values(), &self.index))
    }

    pub fn row_mut(&mut self, i: usize) -> Option<RowMut<'_>> {
        let index = &self.index;
        self.records
            .get_mut(i)
            .map(|r| RowMut::new(r.values_mut(), index))
    }

    /// Values of one column, in row order.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `field` is not a column.
    pub fn column_values(&self, field: &str) -> FrameResult<impl Iterator<Item = &str> + '_> {
        let pos = self.index.require(field)?;
        Ok(self.records.iter().map(move |r| r.values()[pos].as_str()))
    }

    /// Add an empty-string column at the end.
    ///
    /// Every record is extended before the name becomes visible in the
    /// index.
    ///
    /// # Errors
    /// [`FrameError::DuplicateColumn`] if `name` already exists.
    pub fn new_field(&mut self, name: &str) -> FrameResult<()> {
        if self.index.contains(name) {
            return Err(FrameError::DuplicateColumn(name.to_string()));
        }
        for record in &mut self.records {
            record.values_mut().push(String::new());
        }
        self.index.push(name.to_string())?;
        Ok(())
    }

    /// Rename a column, keeping its position.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `old` is absent,
    /// [`FrameError::DuplicateColumn`] if `new` is already taken.
    pub fn rename(&mut self, old: &str, new: &str) -> FrameResult<()> {
        self.index.rename(old, new)
    }

    /// Distinct values of `field` in first-seen order.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `field` is not a column.
    pub fn unique(&self, field: &str) -> FrameResult<Vec<String>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for value in self.column_values(field)? {
            if seen.insert(value) {
                out.push(value.to_string());
            }
        }
        Ok(out)
    }

    /// `true` when every value of `field` parses as a number.
    ///
    /// # Errors
    /// [`FrameError::ColumnNotFound`] if `field` is not a column.
    pub fn numeric_column(&self, field: &str) -> FrameResult<bool> {
        Ok(self
            .column_values(field)?
            .all(|v| parse_float(v).is_some()))
    }
}
