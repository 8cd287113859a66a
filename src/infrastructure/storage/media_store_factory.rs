use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::presentation::config::{StorageBackendSetting, StorageSettings};

use super::local_media_store::LocalMediaStore;
use super::s3_media_store::S3MediaStore;

pub struct MediaStoreFactory;

impl MediaStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn MediaStore>, MediaStoreError> {
        match settings.backend {
            StorageBackendSetting::Local => {
                let path = settings
                    .local_path
                    .as_deref()
                    .ok_or_else(|| MediaStoreError::Backend("local_path required".into()))?;
                let store = LocalMediaStore::new(PathBuf::from(path))?;
                Ok(Arc::new(store))
            }
            StorageBackendSetting::S3 => {
                let region = settings
                    .region
                    .as_deref()
                    .ok_or_else(|| MediaStoreError::Backend("region required".into()))?;
                let store = S3MediaStore::new(region, settings.endpoint.as_deref());
                Ok(Arc::new(store))
            }
        }
    }
}
