use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::debug;

use super::error::StorageError;
use super::traits::ObjectStore;

/// Object store backed by a single bucket on an S3-compatible service.
///
/// Public URLs are derived from a configured base URL, so serving the bucket
/// through a CDN or a storage gateway only changes configuration.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    public_base: String,
}

impl S3ObjectStore {
    pub fn new(bucket: Box<Bucket>, public_base: impl Into<String>) -> Self {
        let public_base = public_base.into().trim_end_matches('/').to_string();
        Self {
            bucket,
            public_base,
        }
    }

    /// Bind to `bucket` on an S3-compatible endpoint.
    pub fn connect(
        endpoint: &str,
        region: &str,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
        public_base: &str,
    ) -> Result<Self, StorageError> {
        let region = Region::Custom {
            region: region.to_string(),
            endpoint: endpoint.to_string(),
        };
        let credentials = Credentials::new(Some(access_key), Some(secret_key), None, None, None)
            .map_err(|e| StorageError::Config(format!("invalid credentials: {e}")))?;
        let bucket = Bucket::new(bucket, region, credentials)
            .map_err(|e| StorageError::Config(e.to_string()))?
            .with_path_style();

        Ok(Self::new(bucket, public_base))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, path: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(path, data, content_type)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;

        match response.status_code() {
            200 | 201 => {
                debug!(path, size = data.len(), "stored object");
                Ok(())
            }
            code => Err(StorageError::Write(format!(
                "bucket returned status {code} for {path}"
            ))),
        }
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .delete_object(path)
            .await
            .map_err(|e| StorageError::Remove(e.to_string()))?;

        match response.status_code() {
            200 | 204 => Ok(()),
            code => Err(StorageError::Remove(format!(
                "bucket returned status {code} for {path}"
            ))),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base, path)
    }
}
