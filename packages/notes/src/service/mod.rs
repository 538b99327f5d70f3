mod delete;
mod upload;

use std::sync::Arc;

use common::storage::{ObjectStore, s3::S3ObjectStore};
use sea_orm::DatabaseConnection;
use tracing::instrument;

use crate::config::AppConfig;
use crate::database::init_db;
use crate::entity::{course, note};
use crate::error::AppError;
use crate::models::{CreateCourseRequest, validate_create_course};
use crate::repo;

/// Entry point for the course/note consistency core.
///
/// Every operation takes the opaque identity of the calling user; ownership
/// is enforced here, while session lifecycle (login, refresh, invalidation)
/// belongs to the caller.
#[derive(Clone)]
pub struct NotesService {
    db: DatabaseConnection,
    store: Arc<dyn ObjectStore>,
    max_blob_size: u64,
}

impl NotesService {
    pub fn new(db: DatabaseConnection, store: Arc<dyn ObjectStore>, max_blob_size: u64) -> Self {
        Self {
            db,
            store,
            max_blob_size,
        }
    }

    /// Bootstrap the service from configuration: database pool plus the
    /// notes bucket.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let db = init_db(&config.database.url).await?;
        let store = S3ObjectStore::connect(
            &config.storage.endpoint,
            &config.storage.region,
            &config.storage.bucket,
            &config.storage.access_key,
            &config.storage.secret_key,
            &config.storage.public_base_url,
        )
        .map_err(AppError::Storage)?;

        Ok(Self::new(
            db,
            Arc::new(store),
            config.storage.max_blob_size,
        ))
    }

    /// Create a course for `owner`. The note counter starts at zero.
    #[instrument(skip(self, req))]
    pub async fn create_course(
        &self,
        owner: &str,
        req: CreateCourseRequest,
    ) -> Result<course::Model, AppError> {
        validate_create_course(&req)?;
        repo::course::insert(&self.db, owner, &req).await
    }

    /// Courses belonging to `owner`, newest first.
    pub async fn list_courses(&self, owner: &str) -> Result<Vec<course::Model>, AppError> {
        repo::course::list_by_owner(&self.db, owner).await
    }

    /// Notes of an owned course, newest first.
    pub async fn list_notes(
        &self,
        owner: &str,
        course_id: i32,
    ) -> Result<Vec<note::Model>, AppError> {
        repo::course::find_owned(&self.db, course_id, owner).await?;
        repo::note::list_by_course(&self.db, course_id).await
    }
}
