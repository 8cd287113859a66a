use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::StorageLocation;

/// S3-backed media store. One `object_store` handle is built per bucket on
/// first use; credentials come from the environment.
pub struct S3MediaStore {
    region: String,
    endpoint: Option<String>,
    buckets: Mutex<HashMap<String, Arc<dyn ObjectStore>>>,
}

impl S3MediaStore {
    pub fn new(region: &str, endpoint: Option<&str>) -> Self {
        Self {
            region: region.to_string(),
            endpoint: endpoint.map(str::to_string),
            buckets: Mutex::new(HashMap::new()),
        }
    }

    fn bucket_handle(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>, MediaStoreError> {
        let mut buckets = self.buckets.lock().expect("bucket map lock poisoned");
        if let Some(handle) = buckets.get(bucket) {
            return Ok(Arc::clone(handle));
        }

        let mut builder = AmazonS3Builder::from_env()
            .with_region(self.region.as_str())
            .with_bucket_name(bucket);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint.as_str()).with_allow_http(true);
        }
        let store = builder
            .build()
            .map_err(|e| MediaStoreError::Backend(e.to_string()))?;

        let handle: Arc<dyn ObjectStore> = Arc::new(store);
        buckets.insert(bucket.to_string(), Arc::clone(&handle));
        Ok(handle)
    }
}

#[async_trait::async_trait]
impl MediaStore for S3MediaStore {
    async fn get_object(&self, location: &StorageLocation) -> Result<Bytes, MediaStoreError> {
        let store = self.bucket_handle(location.bucket())?;
        let path = StorePath::from(location.key());

        let result = store.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => MediaStoreError::NotFound(location.uri()),
            other => MediaStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| MediaStoreError::DownloadFailed(e.to_string()))
    }

    async fn put_object(
        &self,
        location: &StorageLocation,
        data: Bytes,
    ) -> Result<(), MediaStoreError> {
        let store = self.bucket_handle(location.bucket())?;
        let path = StorePath::from(location.key());

        store
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| MediaStoreError::UploadFailed(e.to_string()))?;

        Ok(())
    }

    async fn head(&self, location: &StorageLocation) -> Result<u64, MediaStoreError> {
        let store = self.bucket_handle(location.bucket())?;
        let path = StorePath::from(location.key());

        let meta = store.head(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => MediaStoreError::NotFound(location.uri()),
            other => MediaStoreError::Backend(other.to_string()),
        })?;

        Ok(meta.size as u64)
    }
}
