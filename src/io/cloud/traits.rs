//! The storage collaborator behind [`read_frame_from_object`] and
//! [`write_frame_to_object`].
//!
//! A frame travels as one object holding its CSV bytes: header line first,
//! one line per record. Implementations move those bytes unchanged and never
//! look inside them. Calls are blocking.
//!
//! [`read_frame_from_object`]: super::read_frame_from_object
//! [`write_frame_to_object`]: super::write_frame_to_object

use thiserror::Error;

/// What went wrong talking to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No such bucket or object.
    NotFound,
    /// The bucket or key was rejected before any request was made.
    InvalidInput,
    /// The storage itself failed.
    InternalError,
}

/// A storage failure, surfaced to frame callers as
/// [`FrameError::Cloud`](crate::FrameError::Cloud).
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct CloudIOError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CloudIOError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub type CloudResult<T> = Result<T, CloudIOError>;

/// One entry of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub key: String,
    /// Length of the stored CSV text in bytes.
    pub size: u64,
}

/// Byte storage addressed by bucket and key.
pub trait ObjectIO: Send + Sync {
    /// Store `data` under `bucket/key`, replacing any previous object.
    ///
    /// # Errors
    /// Whatever the storage reports.
    fn put_object(&self, bucket: &str, key: &str, data: &[u8]) -> CloudResult<()>;

    /// Fetch the bytes last stored under `bucket/key`.
    ///
    /// # Errors
    /// [`ErrorKind::NotFound`] if nothing is stored there.
    fn get_object(&self, bucket: &str, key: &str) -> CloudResult<Vec<u8>>;

    /// Remove `bucket/key`. Removing a missing object is not an error.
    ///
    /// # Errors
    /// Whatever the storage reports.
    fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()>;

    /// Objects in `bucket` whose key starts with `prefix`, sorted by key.
    ///
    /// # Errors
    /// [`ErrorKind::NotFound`] if the bucket does not exist.
    fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectMetadata>>;

    /// # Errors
    /// Whatever the storage reports.
    fn object_exists(&self, bucket: &str, key: &str) -> CloudResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_kind() {
        let err = CloudIOError::new(ErrorKind::NotFound, "Object reports/a.csv not found");
        assert_eq!(err.to_string(), "NotFound: Object reports/a.csv not found");
    }
}
