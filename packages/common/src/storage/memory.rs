use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::StorageError;
use super::traits::ObjectStore;

/// In-memory object store for tests and local development.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, StoredEntry>>,
}

struct StoredEntry {
    data: Vec<u8>,
    content_type: String,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes stored at `path`, if any.
    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.lock().await.get(path).map(|e| e.data.clone())
    }

    /// Content type recorded for `path`, if any.
    pub async fn content_type(&self, path: &str) -> Option<String> {
        self.objects
            .lock()
            .await
            .get(path)
            .map(|e| e.content_type.clone())
    }

    /// All stored keys, in no particular order.
    pub async fn paths(&self) -> Vec<String> {
        self.objects.lock().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, path: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        self.objects.lock().await.insert(
            path.to_string(),
            StoredEntry {
                data: data.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        match self.objects.lock().await.remove(path) {
            Some(_) => Ok(()),
            None => Err(StorageError::Remove(format!("no object at {path}"))),
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://{path}")
    }
}
