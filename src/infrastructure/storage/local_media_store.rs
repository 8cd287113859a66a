use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::StorageLocation;

/// Filesystem-backed media store for development; buckets map to directories
/// under the base path.
pub struct LocalMediaStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalMediaStore {
    pub fn new(base_path: PathBuf) -> Result<Self, MediaStoreError> {
        std::fs::create_dir_all(&base_path).map_err(|e| MediaStoreError::Backend(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| MediaStoreError::Backend(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn object_path(location: &StorageLocation) -> StorePath {
        StorePath::from(format!("{}/{}", location.bucket(), location.key()))
    }
}

#[async_trait::async_trait]
impl MediaStore for LocalMediaStore {
    async fn get_object(&self, location: &StorageLocation) -> Result<Bytes, MediaStoreError> {
        let result = self
            .inner
            .get(&Self::object_path(location))
            .await
            .map_err(|e| match e {
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
        self.inner
            .put(&Self::object_path(location), PutPayload::from(data))
            .await
            .map_err(|e| MediaStoreError::UploadFailed(e.to_string()))?;

        Ok(())
    }

    async fn head(&self, location: &StorageLocation) -> Result<u64, MediaStoreError> {
        let meta = self
            .inner
            .head(&Self::object_path(location))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => MediaStoreError::NotFound(location.uri()),
                other => MediaStoreError::Backend(other.to_string()),
            })?;

        Ok(meta.size as u64)
    }
}
