use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::repo;

use super::NotesService;

impl NotesService {
    /// Delete a note and its blob.
    ///
    /// Blob removal is best-effort: a blob that is already gone or a store
    /// that is briefly unreachable must never leave an undeletable note row
    /// behind. The row deletion must succeed; the counter decrement after
    /// it is best-effort again.
    #[instrument(skip(self))]
    pub async fn delete_note(&self, owner: &str, note_id: Uuid) -> Result<(), AppError> {
        let note = repo::note::find(&self.db, note_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Note not found".into()))?;
        repo::course::find_owned(&self.db, note.course_id, owner).await?;

        if let Err(err) = self.store.remove(&note.file_path).await {
            warn!(path = %note.file_path, error = %err, "blob removal failed, deleting metadata anyway");
        }

        if !repo::note::delete(&self.db, note_id).await? {
            return Err(AppError::NotFound("Note not found".into()));
        }

        if let Err(err) = repo::course::decrement_note_count(&self.db, note.course_id).await {
            warn!(course_id = note.course_id, error = %err, "failed to update note count");
        }

        Ok(())
    }

    /// Delete a course and all of its notes.
    ///
    /// Note rows go first (one bulk statement), then the owner-scoped
    /// course row. Blobs are left behind in this flow and reclaimed out of
    /// band. If the second step fails, the surviving course row carries a
    /// stale counter and the caller should retry the deletion.
    #[instrument(skip(self))]
    pub async fn delete_course(&self, owner: &str, course_id: i32) -> Result<(), AppError> {
        repo::course::find_owned(&self.db, course_id, owner).await?;

        let removed = repo::note::delete_by_course(&self.db, course_id).await?;
        debug!(course_id, removed, "deleted course note rows");

        repo::course::delete_owned(&self.db, course_id, owner).await
    }
}
