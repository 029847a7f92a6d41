//! Loading frames from CSV and persisting them back.
//!
//! This module provides:
//! - **Directory + file name loading**: [`read_frame`], [`DataFrame::save`]
//! - **Path-based I/O**: [`read_frame_path`], [`write_frame_path`]
//! - **Reader/writer I/O** for in-memory buffers and object storage:
//!   [`read_frame_from_reader`], [`write_frame_to_writer`]
//!
//! # Design notes
//! - The first row is always the header. A UTF-8 byte order mark at the
//!   start of any header cell is stripped.
//! - File names without `.csv` or `.CSV` anywhere in them get `.csv`
//!   appended, see [`normalize_file_name`].
//! - Rows must have exactly as many fields as the header; a ragged row fails
//!   the whole load.

use crate::error::FrameResult;
use crate::frame::{ColumnIndex, DataFrame};
use crate::row::Record;
use std::fs::{File, create_dir_all};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const BOM: char = '\u{FEFF}';

/// Append `.csv` unless the name already mentions `.csv` or `.CSV`.
///
/// ```
/// use csvframe::io::csv::normalize_file_name;
///
/// assert_eq!(normalize_file_name("sales"), "sales.csv");
/// assert_eq!(normalize_file_name("sales.CSV"), "sales.CSV");
/// ```
pub fn normalize_file_name(file_name: &str) -> String {
    if file_name.contains(".csv") || file_name.contains(".CSV") {
        file_name.to_string()
    } else {
        format!("{file_name}.csv")
    }
}

/// Header cells with any leading byte order mark removed.
pub(crate) fn clean_header(raw: &csv::StringRecord) -> Vec<String> {
    raw.iter()
        .map(|cell| cell.trim_start_matches(BOM).to_string())
        .collect()
}

/// Build a comma-delimited reader that treats every row as data, so the
/// header can be cleaned before it is indexed.
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader)
}

/// Load `file_name` from `dir`.
///
/// # Errors
/// See [`read_frame_path`].
pub fn read_frame(dir: impl AsRef<Path>, file_name: &str) -> FrameResult<DataFrame> {
    read_frame_path(dir.as_ref().join(normalize_file_name(file_name)))
}

/// Load a CSV file into a new frame.
///
/// # Errors
/// [`FrameError::Io`](crate::FrameError::Io) if the file cannot be opened,
/// [`FrameError::Csv`](crate::FrameError::Csv) on malformed or ragged rows,
/// [`FrameError::DuplicateColumn`](crate::FrameError::DuplicateColumn) if a
/// header name repeats.
pub fn read_frame_path(path: impl AsRef<Path>) -> FrameResult<DataFrame> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading frame");
    let df = read_frame_from_reader(File::open(path)?)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.count_records(),
        columns = df.column_count(),
        "frame loaded"
    );
    Ok(df)
}

/// Read a frame from any CSV source.
///
/// An empty source yields a frame with no columns and no rows.
///
/// # Errors
/// See [`read_frame_path`].
pub fn read_frame_from_reader<R: Read>(reader: R) -> FrameResult<DataFrame> {
    let mut rdr = csv_reader(reader);
    let mut rows = rdr.records();

    let Some(header) = rows.next().transpose()? else {
        return Ok(DataFrame::default());
    };
    let mut df = DataFrame::with_index(ColumnIndex::new(clean_header(&header))?);
    for row in rows {
        let row = row?;
        df.push_record(Record::new(row.iter().map(str::to_string).collect()));
    }
    Ok(df)
}

/// Write `frame` to `path`: header first, then one line per record.
///
/// Parent directories are created when missing.
///
/// # Errors
/// [`FrameError::Io`](crate::FrameError::Io) or
/// [`FrameError::Csv`](crate::FrameError::Csv) on write failure.
pub fn write_frame_path(frame: &DataFrame, path: impl AsRef<Path>) -> FrameResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    write_frame_to_writer(frame, File::create(path)?)?;
    tracing::debug!(
        path = %path.display(),
        rows = frame.count_records(),
        "frame written"
    );
    Ok(())
}

/// Write `frame` as CSV to any writer.
///
/// # Errors
/// [`FrameError::Io`](crate::FrameError::Io) or
/// [`FrameError::Csv`](crate::FrameError::Csv) on write failure.
pub fn write_frame_to_writer<W: Write>(frame: &DataFrame, writer: W) -> FrameResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(frame.columns())?;
    for record in frame.records() {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;
    Ok(())
}

impl DataFrame {
    /// Save to `dir/file_name` (with `.csv` appended when missing) and
    /// return the written path.
    ///
    /// # Errors
    /// See [`write_frame_path`].
    pub fn save(&self, dir: impl AsRef<Path>, file_name: &str) -> FrameResult<PathBuf> {
        let path = dir.as_ref().join(normalize_file_name(file_name));
        write_frame_path(self, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;
    use crate::row::FieldAccess;

    #[test]
    fn file_names_are_normalized() {
        assert_eq!(normalize_file_name("TestData"), "TestData.csv");
        assert_eq!(normalize_file_name("TestData.csv"), "TestData.csv");
        assert_eq!(normalize_file_name("TestData.CSV"), "TestData.CSV");
        assert_eq!(normalize_file_name("a.csv.bak"), "a.csv.bak");
    }

    #[test]
    fn bom_is_stripped_from_header() {
        let data = "\u{FEFF}ID,Name\n1,Kevin\n2,Beth\n";
        let df = read_frame_from_reader(data.as_bytes()).unwrap();
        assert_eq!(df.columns(), ["ID", "Name"]);
        assert_eq!(df.row(1).unwrap().val("ID").unwrap(), "2");
    }

    #[test]
    fn quoted_cells_round_trip() {
        let data = "ID,City\n1,\"JEFFERSON CITY, MO\"\n";
        let df = read_frame_from_reader(data.as_bytes()).unwrap();
        assert_eq!(df.row(0).unwrap().val("City").unwrap(), "JEFFERSON CITY, MO");

        let mut out = Vec::new();
        write_frame_to_writer(&df, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), data);
    }

    #[test]
    fn ragged_rows_fail() {
        let data = "ID,Name\n1,Kevin\n2\n";
        assert!(matches!(
            read_frame_from_reader(data.as_bytes()),
            Err(FrameError::Csv(_))
        ));
    }

    #[test]
    fn duplicate_headers_fail() {
        let data = "ID,ID\n1,2\n";
        assert!(matches!(
            read_frame_from_reader(data.as_bytes()),
            Err(FrameError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn empty_source_is_an_empty_frame() {
        let df = read_frame_from_reader("".as_bytes()).unwrap();
        assert_eq!(df.column_count(), 0);
        assert!(df.is_empty());
    }
}
