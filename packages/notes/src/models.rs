use serde::Deserialize;

use crate::classify::NoteContent;
use crate::error::AppError;

/// Maximum title length for courses and notes, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

#[derive(Clone, Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub professor: String,
    pub description: Option<String>,
}

/// Input to the upload flow. The payload variant carries the user-selected
/// category.
#[derive(Clone, Debug)]
pub struct UploadNoteRequest {
    pub title: String,
    pub content: NoteContent,
}

/// Validate a trimmed title (1-100 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation(
            "Title must be 1-100 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_create_course(req: &CreateCourseRequest) -> Result<(), AppError> {
    validate_title(&req.title)?;
    let professor = req.professor.trim();
    if professor.is_empty() || professor.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Validation(
            "Professor name must be 1-100 characters".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, professor: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            title: title.to_string(),
            professor: professor.to_string(),
            description: None,
        }
    }

    #[test]
    fn validate_title_accepts_reasonable_titles() {
        assert!(validate_title("CS101: Introduction to Programming").is_ok());
        assert!(validate_title("  padded  ").is_ok());
    }

    #[test]
    fn validate_title_rejects_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn validate_title_rejects_overlong() {
        assert!(validate_title(&"x".repeat(101)).is_err());
        assert!(validate_title(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn create_course_requires_professor() {
        assert!(validate_create_course(&request("Algorithms", "")).is_err());
        assert!(validate_create_course(&request("Algorithms", "Dr. Smith")).is_ok());
    }

    #[test]
    fn create_course_requires_title() {
        assert!(validate_create_course(&request(" ", "Dr. Smith")).is_err());
    }
}
