//! Loading and saving frames through object storage.
//!
//! The crate talks to storage only through [`ObjectIO`]. A frame is written
//! as a single object holding its CSV text and read back through the same
//! parser as local files, so a byte order mark on the first header is
//! stripped here too. Keys must name a `.csv` object and buckets must be
//! non-empty; both are checked before storage is touched.
//!
//! ```
//! use csvframe::DataFrame;
//! use csvframe::io::cloud::*;
//!
//! # fn main() -> csvframe::FrameResult<()> {
//! let storage = FakeObjectIO::new();
//! let df = DataFrame::new(["ID", "Cost"])?.with_record(&["1", "818"])?;
//!
//! write_frame_to_object(&df, &storage, "reports", "daily/sales.csv")?;
//! let back = read_frame_from_object(&storage, "reports", "daily/sales.csv")?;
//! assert_eq!(back, df);
//! # Ok(())
//! # }
//! ```
//!
//! A provider client plugs in by mapping its failures onto [`ErrorKind`]:
//!
//! ```ignore
//! impl ObjectIO for BucketClient {
//!     fn get_object(&self, bucket: &str, key: &str) -> CloudResult<Vec<u8>> {
//!         match self.download(bucket, key) {
//!             Ok(bytes) => Ok(bytes),
//!             Err(e) if e.is_missing() => Err(CloudIOError::new(ErrorKind::NotFound, e.to_string())),
//!             Err(e) => Err(CloudIOError::new(ErrorKind::InternalError, e.to_string())),
//!         }
//!     }
//!     // ...
//! }
//! ```

pub mod fake;
pub mod traits;

pub use fake::*;
pub use traits::*;

use crate::error::FrameResult;
use crate::frame::DataFrame;
use crate::io::csv::{read_frame_from_reader, write_frame_to_writer};

fn check_location(bucket: &str, key: &str) -> CloudResult<()> {
    if bucket.is_empty() {
        return Err(CloudIOError::new(
            ErrorKind::InvalidInput,
            "bucket name cannot be empty",
        ));
    }
    if !key.contains(".csv") && !key.contains(".CSV") {
        return Err(CloudIOError::new(
            ErrorKind::InvalidInput,
            format!("object key {key:?} does not name a CSV file"),
        ));
    }
    Ok(())
}

/// Download `bucket/key` and parse it as a CSV frame.
///
/// # Errors
/// [`FrameError::Cloud`](crate::FrameError::Cloud) with
/// [`ErrorKind::InvalidInput`] for an empty bucket or a key without `.csv`,
/// or whatever the storage returns; CSV errors as for
/// [`read_frame_from_reader`].
pub fn read_frame_from_object(
    storage: &dyn ObjectIO,
    bucket: &str,
    key: &str,
) -> FrameResult<DataFrame> {
    check_location(bucket, key)?;
    tracing::debug!(bucket, key, "downloading frame");
    let bytes = storage.get_object(bucket, key)?;
    read_frame_from_reader(bytes.as_slice())
}

/// Serialize `frame` as CSV and upload it to `bucket/key`.
///
/// # Errors
/// As for [`read_frame_from_object`].
pub fn write_frame_to_object(
    frame: &DataFrame,
    storage: &dyn ObjectIO,
    bucket: &str,
    key: &str,
) -> FrameResult<()> {
    check_location(bucket, key)?;
    let mut bytes = Vec::new();
    write_frame_to_writer(frame, &mut bytes)?;
    tracing::debug!(bucket, key, size = bytes.len(), "uploading frame");
    storage.put_object(bucket, key, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;

    #[test]
    fn rejects_bad_locations() {
        let storage = FakeObjectIO::new();
        for (bucket, key) in [("", "a.csv"), ("reports", "a.txt")] {
            let err = read_frame_from_object(&storage, bucket, key).unwrap_err();
            assert!(matches!(
                err,
                FrameError::Cloud(CloudIOError {
                    kind: ErrorKind::InvalidInput,
                    ..
                })
            ));
        }
    }

    #[test]
    fn missing_object_is_not_found() {
        let storage = FakeObjectIO::new();
        let err = read_frame_from_object(&storage, "reports", "none.csv").unwrap_err();
        assert!(matches!(
            err,
            FrameError::Cloud(CloudIOError {
                kind: ErrorKind::NotFound,
                ..
            })
        ));
    }
}
