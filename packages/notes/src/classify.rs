use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use common::storage::file_extension;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fixed set of note categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Image,
    Audio,
    Pdf,
    Text,
}

impl NoteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "pdf" => Ok(Self::Pdf),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown note category: {other}")),
        }
    }
}

/// A candidate file as handed over by the caller: declared name, declared
/// MIME type (if any), and raw bytes.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Declared MIME type, falling back to a guess from the filename.
    pub fn effective_content_type(&self) -> Option<String> {
        self.content_type.clone().or_else(|| {
            mime_guess::from_path(&self.filename)
                .first()
                .map(|m| m.to_string())
        })
    }
}

/// Upload payload, tagged by the user-selected category.
#[derive(Clone, Debug)]
pub enum NoteContent {
    Image(UploadFile),
    Audio(UploadFile),
    Pdf(UploadFile),
    /// Freeform text written by the user; no file is uploaded for this
    /// category, a `.txt` blob is synthesized instead.
    Text(String),
}

impl NoteContent {
    pub fn category(&self) -> NoteCategory {
        match self {
            Self::Image(_) => NoteCategory::Image,
            Self::Audio(_) => NoteCategory::Audio,
            Self::Pdf(_) => NoteCategory::Pdf,
            Self::Text(_) => NoteCategory::Text,
        }
    }

    /// Validate the payload against its selected category.
    ///
    /// Rejected content never reaches the object store.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            Self::Image(file) => require_mime_prefix(file, "image/"),
            Self::Audio(file) => require_mime_prefix(file, "audio/"),
            Self::Pdf(file) => {
                let by_mime =
                    file.effective_content_type().as_deref() == Some("application/pdf");
                let by_ext = file_extension(&file.filename).as_deref() == Some("pdf");
                if by_mime || by_ext {
                    Ok(())
                } else {
                    Err(AppError::Validation(
                        "Invalid file type. Please select a pdf file".into(),
                    ))
                }
            }
            Self::Text(content) => {
                if content.trim().is_empty() {
                    Err(AppError::Validation("Text content cannot be empty".into()))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Payload size in bytes, as it would be stored.
    pub fn size(&self) -> u64 {
        match self {
            Self::Image(f) | Self::Audio(f) | Self::Pdf(f) => f.bytes.len() as u64,
            Self::Text(content) => content.len() as u64,
        }
    }

    /// Name, MIME type and bytes to hand to the object store. For text
    /// notes this synthesizes the `.txt` upload from the note title.
    pub fn to_upload(&self, title: &str) -> (String, String, Vec<u8>) {
        match self {
            Self::Image(f) | Self::Audio(f) => (
                f.filename.clone(),
                f.effective_content_type()
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                f.bytes.clone(),
            ),
            Self::Pdf(f) => (
                f.filename.clone(),
                // A PDF accepted by extension alone may carry no MIME type.
                f.effective_content_type()
                    .unwrap_or_else(|| "application/pdf".to_string()),
                f.bytes.clone(),
            ),
            Self::Text(content) => (
                text_note_filename(title),
                "text/plain".to_string(),
                content.as_bytes().to_vec(),
            ),
        }
    }
}

fn require_mime_prefix(file: &UploadFile, prefix: &str) -> Result<(), AppError> {
    match file.effective_content_type() {
        Some(mime) if mime.starts_with(prefix) => Ok(()),
        _ => Err(AppError::Validation(format!(
            "Invalid file type. Please select a {} file",
            prefix.trim_end_matches('/')
        ))),
    }
}

/// Display filename for a synthesized text note: the sanitized, lower-cased
/// title plus a millisecond timestamp to avoid collisions.
pub fn text_note_filename(title: &str) -> String {
    let safe: String = title
        .trim()
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() { "note".to_string() } else { safe };

    format!("{safe}_{}.txt", Utc::now().timestamp_millis())
}

/// Map a bare filename extension to a category via a static table.
///
/// Used when the category must be inferred rather than chosen (e.g. for
/// external links); `None` means "other". Independent of upload-time
/// validation above.
pub fn infer_category_from_extension(filename: &str) -> Option<NoteCategory> {
    match file_extension(filename)?.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(NoteCategory::Image),
        "mp3" | "wav" | "ogg" | "m4a" => Some(NoteCategory::Audio),
        "pdf" => Some(NoteCategory::Pdf),
        "txt" => Some(NoteCategory::Text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(filename: &str, content_type: Option<&str>) -> UploadFile {
        UploadFile {
            filename: filename.to_string(),
            content_type: content_type.map(|s| s.to_string()),
            bytes: vec![0u8; 4],
        }
    }

    #[test]
    fn image_accepts_image_mime() {
        let content = NoteContent::Image(file("photo.png", Some("image/png")));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn image_rejects_other_mime() {
        let content = NoteContent::Image(file("track.mp3", Some("audio/mpeg")));
        assert!(matches!(content.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn audio_accepts_audio_mime() {
        let content = NoteContent::Audio(file("track.mp3", Some("audio/mpeg")));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn pdf_accepts_pdf_mime() {
        let content = NoteContent::Pdf(file("paper", Some("application/pdf")));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn pdf_accepts_pdf_extension_case_insensitive() {
        let content = NoteContent::Pdf(file("Paper.PDF", None));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn pdf_rejects_mismatched_file() {
        let content = NoteContent::Pdf(file("photo.png", Some("image/png")));
        assert!(matches!(content.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn text_rejects_whitespace_only_content() {
        let content = NoteContent::Text("   \n\t".to_string());
        assert!(matches!(content.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn text_accepts_non_empty_content() {
        let content = NoteContent::Text("some notes".to_string());
        assert!(content.validate().is_ok());
    }

    #[test]
    fn missing_mime_falls_back_to_filename_guess() {
        let content = NoteContent::Image(file("photo.png", None));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn declared_mime_wins_over_filename() {
        // Declared type says audio even though the name looks like an image.
        let f = file("misnamed.png", Some("audio/mpeg"));
        assert_eq!(f.effective_content_type().as_deref(), Some("audio/mpeg"));
    }

    #[test]
    fn text_upload_is_synthesized() {
        let content = NoteContent::Text("hello world".to_string());
        let (name, mime, bytes) = content.to_upload("Lecture 1: Key Concepts");

        assert!(name.starts_with("lecture_1__key_concepts_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(mime, "text/plain");
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn text_filename_keeps_safe_characters() {
        let name = text_note_filename("intro-1.2_final");
        assert!(name.starts_with("intro-1.2_final_"));
    }

    #[test]
    fn text_filename_falls_back_for_empty_title() {
        let name = text_note_filename("   ");
        assert!(name.starts_with("note_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn category_follows_the_variant() {
        assert_eq!(
            NoteContent::Text("x".into()).category(),
            NoteCategory::Text
        );
        assert_eq!(
            NoteContent::Pdf(file("a.pdf", None)).category(),
            NoteCategory::Pdf
        );
    }

    #[test]
    fn category_string_round_trip() {
        for category in [
            NoteCategory::Image,
            NoteCategory::Audio,
            NoteCategory::Pdf,
            NoteCategory::Text,
        ] {
            assert_eq!(category.as_str().parse::<NoteCategory>(), Ok(category));
        }
        assert!("video".parse::<NoteCategory>().is_err());
    }

    #[test]
    fn category_serde_uses_lowercase() {
        let json = serde_json::to_string(&NoteCategory::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");
        let parsed: NoteCategory = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(parsed, NoteCategory::Audio);
    }

    #[test]
    fn infer_category_table() {
        assert_eq!(
            infer_category_from_extension("a.jpg"),
            Some(NoteCategory::Image)
        );
        assert_eq!(
            infer_category_from_extension("a.WEBP"),
            Some(NoteCategory::Image)
        );
        assert_eq!(
            infer_category_from_extension("a.m4a"),
            Some(NoteCategory::Audio)
        );
        assert_eq!(
            infer_category_from_extension("a.pdf"),
            Some(NoteCategory::Pdf)
        );
        assert_eq!(
            infer_category_from_extension("a.txt"),
            Some(NoteCategory::Text)
        );
    }

    #[test]
    fn infer_category_unknown_is_none() {
        assert_eq!(infer_category_from_extension("a.docx"), None);
        assert_eq!(infer_category_from_extension("no_extension"), None);
    }
}
