use async_trait::async_trait;

use super::error::StorageError;
use super::key::generate_object_key;

/// Location of a stored object: the store-internal key plus the public URL
/// its bytes resolve at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
    pub public_url: String,
}

/// Path-addressed object storage with stable public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` at `path` with the given content type.
    async fn put(&self, path: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Remove the object at `path`.
    async fn remove(&self, path: &str) -> Result<(), StorageError>;

    /// Public URL for the object at `path`.
    ///
    /// Pure function of the store configuration and the path; never a
    /// network round trip.
    fn public_url(&self, path: &str) -> String;

    /// Store `data` under a generated key inside `folder` and return where
    /// it landed. See [`generate_object_key`] for the key shape.
    async fn store(
        &self,
        folder: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let path = generate_object_key(folder, filename);
        self.put(&path, data, content_type).await?;
        Ok(StoredObject {
            public_url: self.public_url(&path),
            path,
        })
    }
}
