//! In-memory object storage for tests.

use crate::io::cloud::traits::{CloudIOError, CloudResult, ErrorKind, ObjectIO, ObjectMetadata};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

type BucketStorage = Arc<Mutex<HashMap<String, HashMap<String, Vec<u8>>>>>;

/// Object storage held in a shared map. Clones see the same buckets.
#[derive(Clone, Default)]
pub struct FakeObjectIO {
    storage: BucketStorage,
}

impl FakeObjectIO {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CloudResult<MutexGuard<'_, HashMap<String, HashMap<String, Vec<u8>>>>> {
        self.storage.lock().map_err(|e| {
            CloudIOError::new(ErrorKind::InternalError, format!("storage mutex poisoned: {e}"))
        })
    }
}

fn metadata(key: &str, data: &[u8]) -> ObjectMetadata {
    ObjectMetadata {
        key: key.to_string(),
        size: data.len() as u64,
    }
}

impl ObjectIO for FakeObjectIO {
    fn put_object(&self, bucket: &str, key: &str, data: &[u8]) -> CloudResult<()> {
        self.lock()?
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn get_object(&self, bucket: &str, key: &str) -> CloudResult<Vec<u8>> {
        self.lock()?
            .get(bucket)
            .and_then(|b| b.get(key))
            .cloned()
            .ok_or_else(|| {
                CloudIOError::new(
                    ErrorKind::NotFound,
                    format!("Object {bucket}/{key} not found"),
                )
            })
    }

    fn delete_object(&self, bucket: &str, key: &str) -> CloudResult<()> {
        if let Some(bucket_map) = self.lock()?.get_mut(bucket) {
            bucket_map.remove(key);
        }
        Ok(())
    }

    fn list_objects(&self, bucket: &str, prefix: Option<&str>) -> CloudResult<Vec<ObjectMetadata>> {
        let storage = self.lock()?;
        let bucket_map = storage.get(bucket).ok_or_else(|| {
            CloudIOError::new(ErrorKind::NotFound, format!("Bucket {bucket} not found"))
        })?;

        let mut objects: Vec<ObjectMetadata> = bucket_map
            .iter()
            .filter(|(key, _)| prefix.is_none_or(|p| key.starts_with(p)))
            .map(|(key, data)| metadata(key, data))
            .collect();

        drop(storage);
        objects.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(objects)
    }

    fn object_exists(&self, bucket: &str, key: &str) -> CloudResult<bool> {
        Ok(self
            .lock()?
            .get(bucket)
            .is_some_and(|b| b.contains_key(key)))
    }
}
