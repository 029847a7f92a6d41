//! Row-at-a-time CSV reading for files too large to materialize.
//!
//! [`stream_csv`] opens a file, indexes its header once and returns a
//! [`RecordStream`]: an iterator of [`StreamingRecord`]s that share that
//! header through an `Arc`. Each record supports the same name-based
//! accessors as a frame row via [`FieldAccess`].
//!
//! ```no_run
//! use csvframe::FieldAccess;
//! use csvframe::io::stream::stream_csv;
//!
//! # fn main() -> csvframe::FrameResult<()> {
//! let mut total = 0.0;
//! for record in stream_csv("data", "TestData")? {
//!     total += record?.convert_to_float("Cost")?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{FrameError, FrameResult};
use crate::frame::ColumnIndex;
use crate::io::csv::{clean_header, csv_reader, normalize_file_name};
use crate::row::{FieldAccess, Record};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// One streamed row paired with the shared header index.
#[derive(Clone, Debug)]
pub struct StreamingRecord {
    values: Vec<String>,
    index: Arc<ColumnIndex>,
}

impl StreamingRecord {
    pub fn into_record(self) -> Record {
        Record::new(self.values)
    }
}

impl FieldAccess for StreamingRecord {
    fn column_index(&self) -> &ColumnIndex {
        &self.index
    }

    fn values(&self) -> &[String] {
        &self.values
    }
}

/// Iterator over the data rows of a CSV source.
///
/// Yields `Err` for a malformed or ragged row; iteration may continue past
/// it.
pub struct RecordStream<R: Read = File> {
    rows: csv::StringRecordsIntoIter<R>,
    index: Arc<ColumnIndex>,
}

impl<R: Read> RecordStream<R> {
    /// Index the header of `reader` and stream the remaining rows.
    ///
    /// # Errors
    /// [`FrameError::Csv`](crate::FrameError::Csv) if the header cannot be
    /// read, [`FrameError::DuplicateColumn`](crate::FrameError::DuplicateColumn)
    /// if a header name repeats.
    pub fn from_reader(reader: R) -> FrameResult<Self> {
        let mut rows = csv_reader(reader).into_records();
        let names = match rows.next().transpose()? {
            Some(header) => clean_header(&header),
            None => Vec::new(),
        };
        Ok(Self {
            rows,
            index: Arc::new(ColumnIndex::new(names)?),
        })
    }

    /// The header shared by every record.
    pub fn column_index(&self) -> &ColumnIndex {
        &self.index
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = FrameResult<StreamingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.map_err(FrameError::from).map(|row| StreamingRecord {
            values: row.iter().map(str::to_string).collect(),
            index: Arc::clone(&self.index),
        }))
    }
}

/// Open `dir/file_name` (with `.csv` appended when missing) for streaming.
///
/// # Errors
/// [`FrameError::Io`](crate::FrameError::Io) if the file cannot be opened,
/// otherwise see [`RecordStream::from_reader`].
pub fn stream_csv(dir: impl AsRef<Path>, file_name: &str) -> FrameResult<RecordStream> {
    let path = dir.as_ref().join(normalize_file_name(file_name));
    tracing::debug!(path = %path.display(), "opening record stream");
    RecordStream::from_reader(File::open(&path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_share_the_header() {
        let data = "\u{FEFF}ID,Cost\n1,818\n2,777\n";
        let stream = RecordStream::from_reader(data.as_bytes()).unwrap();
        assert_eq!(stream.column_index().names(), ["ID", "Cost"]);

        let records: Vec<_> = stream.collect::<FrameResult<_>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].convert_to_int("Cost").unwrap(), 777);
        assert!(Arc::ptr_eq(&records[0].index, &records[1].index));
        assert!(matches!(
            records[0].val("Weight"),
            Err(FrameError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn ragged_row_is_reported() {
        let data = "ID,Cost\n1,818\n2\n";
        let results: Vec<_> = RecordStream::from_reader(data.as_bytes())
            .unwrap()
            .collect();
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(FrameError::Csv(_))));
    }
}
