//! # csvframe
//!
//! An **in-memory DataFrame backed by CSV files**. Load rows from disk into a
//! column-indexed record set, filter, project, merge, stack and aggregate
//! them, then write the result back to CSV.
//!
//! ## Key Features
//!
//! - **Name-based row access** - read, convert and update cells by column name
//! - **Filters** - membership, numeric thresholds and date ranges
//! - **Merges** - widen a frame in place or build an inner join on a key column
//! - **Aggregation** - sum, average, min, max, standard deviation, or any custom
//!   [`Aggregate`] combiner
//! - **Concurrent loading** - read many files on a bounded worker pool with
//!   results in input order
//! - **Streaming** - iterate over very large files one row at a time
//! - **Object storage** - load and save frames through any [`ObjectIO`](io::cloud::ObjectIO)
//!   implementation (feature `cloud`)
//!
//! ## Quick Start
//!
//! ```
//! use csvframe::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! # let fixtures = csvframe::testing::FixtureDir::new()?;
//! # let dir = fixtures.path();
//! let df = read_frame(dir, "TestData")?;
//!
//! let heavy = df.greater_than_or_equal_to("Weight", 400.0)?;
//! let recent = heavy.filtered_after("Date", "1/4/22")?;
//! assert_eq!(recent.count_records(), 3);
//!
//! let report = recent.keep_columns(&["ID", "Last Name", "Weight"])?;
//! report.save(dir, "heavy_recent")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### DataFrame
//!
//! A [`DataFrame`] is an ordered list of records plus one [`ColumnIndex`]. All
//! cells are strings; numeric and date interpretation happens at the point of
//! use. Query operations return new frames holding copies of the selected
//! records, so derived frames never alias their source.
//!
//! ### Rows
//!
//! [`DataFrame::rows`] yields [`Row`] handles and [`DataFrame::rows_mut`]
//! yields [`RowMut`] handles. Both borrow the frame's column index and share
//! the [`FieldAccess`] accessors:
//!
//! ```
//! use csvframe::{DataFrame, FieldAccess};
//!
//! # fn main() -> csvframe::FrameResult<()> {
//! let mut df = DataFrame::new(["ID", "Cost"])?.with_record(&["1", "818"])?;
//! for mut row in df.rows_mut() {
//!     let doubled = row.convert_to_float("Cost")? * 2.0;
//!     row.update("Cost", doubled.to_string())?;
//! }
//! assert_eq!(df.row(0).unwrap().val("Cost")?, "1636");
//! # Ok(())
//! # }
//! ```
//!
//! ### Errors
//!
//! Every fallible operation returns [`FrameResult`]. Nothing in the crate
//! panics or exits on bad input.
//!
//! ### Logging
//!
//! File reads and writes, loader jobs and batch completion are reported
//! through [`tracing`]. The crate installs no subscriber.
//!
//! ## Feature Flags
//!
//! - `io-glob` - glob expansion and [`load_glob`] (default)
//! - `cloud` - the [`ObjectIO`](io::cloud::ObjectIO) trait, its in-memory fake
//!   and frame upload/download (default)
//!
//! ## Module Overview
//!
//! - [`frame`] - `DataFrame` and `ColumnIndex`
//! - [`row`] - records and row handles
//! - [`query`] - filters, projection and sorting
//! - [`joins`] - merges and concatenation
//! - [`combiners`] - aggregation
//! - [`partition`] - splitting a frame into sub-frames
//! - [`date`] - date normalization
//! - [`io`] - CSV files, streaming, globbing and object storage
//! - [`loader`] and [`config`] - concurrent multi-file loading
//! - [`testing`] - fixtures and assertions for tests

pub mod combiners;
pub mod config;
pub mod date;
pub mod error;
pub mod frame;
pub mod io;
pub mod joins;
pub mod loader;
pub mod partition;
pub mod query;
pub mod row;
pub mod testing;

// General re-exports
pub use combiners::{Aggregate, Max, Mean, Min, StdDev, Sum, standard_deviation_of};
pub use config::LoaderConfig;
pub use date::{normalize_date, parse_date};
pub use error::{FrameError, FrameResult};
pub use frame::{ColumnIndex, DataFrame};
pub use io::csv::{
    normalize_file_name, read_frame, read_frame_from_reader, read_frame_path,
    write_frame_path, write_frame_to_writer,
};
pub use io::stream::{RecordStream, StreamingRecord, stream_csv};
pub use loader::{FrameLoader, load_frames};
pub use row::{FieldAccess, Record, Row, RowMut};

// Gated re-exports
#[cfg(feature = "io-glob")]
pub use io::glob::expand_glob;

#[cfg(feature = "io-glob")]
pub use loader::load_glob;

#[cfg(feature = "cloud")]
pub use io::cloud::{read_frame_from_object, write_frame_to_object};
