use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::StorageLocation;

/// In-memory media store for tests.
pub struct MockMediaStore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MockMediaStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, location: &StorageLocation, data: impl Into<Bytes>) {
        self.objects
            .lock()
            .expect("objects lock poisoned")
            .insert(location.uri(), data.into());
    }

    pub fn object(&self, location: &StorageLocation) -> Option<Bytes> {
        self.objects
            .lock()
            .expect("objects lock poisoned")
            .get(&location.uri())
            .cloned()
    }

    /// Keys currently stored under the given bucket.
    pub fn keys_in_bucket(&self, bucket: &str) -> Vec<String> {
        let prefix = format!("s3://{}/", bucket);
        self.objects
            .lock()
            .expect("objects lock poisoned")
            .keys()
            .filter_map(|uri| uri.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }
}

impl Default for MockMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MediaStore for MockMediaStore {
    async fn get_object(&self, location: &StorageLocation) -> Result<Bytes, MediaStoreError> {
        self.object(location)
            .ok_or_else(|| MediaStoreError::NotFound(location.uri()))
    }

    async fn put_object(
        &self,
        location: &StorageLocation,
        data: Bytes,
    ) -> Result<(), MediaStoreError> {
        self.insert(location, data);
        Ok(())
    }

    async fn head(&self, location: &StorageLocation) -> Result<u64, MediaStoreError> {
        self.object(location)
            .map(|data| data.len() as u64)
            .ok_or_else(|| MediaStoreError::NotFound(location.uri()))
    }
}
