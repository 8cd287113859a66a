mod local_media_store;
mod media_store_factory;
mod mock_media_store;
mod s3_media_store;

pub use local_media_store::LocalMediaStore;
pub use media_store_factory::MediaStoreFactory;
pub use mock_media_store::MockMediaStore;
pub use s3_media_store::S3MediaStore;
