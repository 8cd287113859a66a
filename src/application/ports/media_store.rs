use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StorageLocation;

/// Object store holding the pipeline's media and transcript artifacts.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn get_object(&self, location: &StorageLocation) -> Result<Bytes, MediaStoreError>;

    async fn put_object(
        &self,
        location: &StorageLocation,
        data: Bytes,
    ) -> Result<(), MediaStoreError>;

    /// Size of the object in bytes, or `NotFound`.
    async fn head(&self, location: &StorageLocation) -> Result<u64, MediaStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}
