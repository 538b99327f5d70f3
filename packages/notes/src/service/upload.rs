use tracing::{instrument, warn};

use crate::entity::note;
use crate::error::AppError;
use crate::models::{UploadNoteRequest, validate_title};
use crate::repo;

use super::NotesService;

impl NotesService {
    /// Upload a note into an owned course.
    ///
    /// The step order is the consistency contract: validate (no side
    /// effects) → write the blob → insert the row → bump the counter. A
    /// blob without a row (insert failed) is an unreferenced leftover,
    /// reclaimable out of band; a stale counter (bump failed) is advisory
    /// drift. Neither aborts a step that already succeeded.
    #[instrument(skip(self, req))]
    pub async fn upload_note(
        &self,
        owner: &str,
        course_id: i32,
        req: UploadNoteRequest,
    ) -> Result<note::Model, AppError> {
        // Validating. Purely local checks, then an ownership read; nothing
        // has been written anywhere yet.
        validate_title(&req.title)?;
        req.content.validate()?;
        if req.content.size() > self.max_blob_size {
            return Err(AppError::Validation(format!(
                "File exceeds maximum size of {} bytes",
                self.max_blob_size
            )));
        }
        repo::course::find_owned(&self.db, course_id, owner).await?;

        // Uploading. One folder per course so a course's blobs can be
        // enumerated later.
        let (file_name, content_type, bytes) = req.content.to_upload(&req.title);
        let folder = format!("course_{course_id}");
        let stored = self
            .store
            .store(&folder, &file_name, &bytes, &content_type)
            .await
            .map_err(AppError::Storage)?;

        // PersistingMetadata.
        let new = repo::note::NewNote {
            title: &req.title,
            course_id,
            category: req.content.category(),
            file_path: stored.path.clone(),
            file_url: stored.public_url,
            file_name,
        };
        let note = match repo::note::insert(&self.db, new).await {
            Ok(note) => note,
            Err(err) => {
                warn!(path = %stored.path, "note insert failed, blob is now orphaned");
                return Err(err);
            }
        };

        // UpdatingCounter. Best-effort: the note exists either way.
        if let Err(err) = repo::course::increment_note_count(&self.db, course_id).await {
            warn!(course_id, error = %err, "failed to update note count");
        }

        Ok(note)
    }
}
