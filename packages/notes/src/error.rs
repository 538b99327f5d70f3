use common::storage::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

/// Application-level error type.
///
/// Best-effort steps have no variant here on purpose: blob removal and
/// counter updates may only be logged by the orchestrators, never surfaced.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input. Raised before any network call and recoverable by
    /// correcting the input.
    #[error("{0}")]
    Validation(String),

    /// The operation targets a course owned by someone else.
    #[error("insufficient permissions")]
    PermissionDenied,

    #[error("{0}")]
    NotFound(String),

    /// The blob store rejected a write, or could not be initialized. No
    /// metadata row exists at this point, so the whole operation is safe to
    /// retry as-is.
    #[error("storage error: {0}")]
    Storage(#[source] StorageError),

    /// A metadata row insert, update or delete failed. During note creation
    /// this can leave an unreferenced blob behind; that blob is reclaimable
    /// out of band and never corrupts reads.
    #[error("metadata store error: {0}")]
    Metadata(#[from] DbErr),
}
