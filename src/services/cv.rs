use crate::error::AppError;

/// File extensions accepted for CV uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Profile types with a canned per-CV dataset. The inferred type becomes
/// the prefix of the opaque file reference, which is how the mock
/// directory later picks the dataset.
const PROFILE_KEYWORDS: &[(&str, &str)] = &[
    ("dev", "dev"),
    ("engineer", "dev"),
    ("entwickler", "dev"),
    ("sales", "sales"),
    ("vertrieb", "sales"),
    ("finance", "finance"),
    ("finanz", "finance"),
];

/// Result of a simulated CV parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvUpload {
    /// Opaque handle, `{type}-{uuid}`.
    pub file_reference: String,
    /// Display name derived from the filename.
    pub candidate_label: String,
}

/// Validate an uploaded CV and derive its file reference.
///
/// Empty files and disallowed extensions are rejected; the caller shows an
/// inline retry card and no file reference is produced.
pub fn parse_cv_upload(file_name: &str, size_bytes: u64) -> Result<CvUpload, AppError> {
    if size_bytes == 0 {
        return Err(AppError::CvRejected("file is empty".into()));
    }

    let (stem, extension) = file_name
        .rsplit_once('.')
        .ok_or_else(|| AppError::CvRejected("file has no extension".into()))?;

    let extension = extension.to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::CvRejected(format!(
            "unsupported file type '.{extension}', expected one of: pdf, doc, docx"
        )));
    }

    if stem.is_empty() {
        return Err(AppError::CvRejected("file has no name".into()));
    }

    Ok(CvUpload {
        file_reference: format!("{}-{}", profile_type(stem), uuid::Uuid::new_v4()),
        candidate_label: candidate_label(stem),
    })
}

/// Infer the canned profile type from keywords in the filename.
fn profile_type(stem: &str) -> &'static str {
    let lower = stem.to_lowercase();
    PROFILE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, profile)| *profile)
        .unwrap_or("generic")
}

/// Humanize the filename stem into a candidate display name.
fn candidate_label(stem: &str) -> String {
    stem.split(['-', '_', '.'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_doc_docx() {
        for name in ["cv.pdf", "cv.doc", "cv.docx", "CV.PDF"] {
            assert!(parse_cv_upload(name, 1024).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        let err = parse_cv_upload("x.txt", 1024).unwrap_err();
        assert!(matches!(err, AppError::CvRejected(_)));
    }

    #[test]
    fn test_rejects_empty_file() {
        let err = parse_cv_upload("cv.pdf", 0).unwrap_err();
        assert!(matches!(err, AppError::CvRejected(_)));
    }

    #[test]
    fn test_rejects_file_without_extension() {
        assert!(parse_cv_upload("resume", 1024).is_err());
    }

    #[test]
    fn test_file_reference_carries_profile_type_prefix() {
        let upload = parse_cv_upload("jane-doe-senior-engineer.pdf", 2048).unwrap();
        assert!(upload.file_reference.starts_with("dev-"));

        let upload = parse_cv_upload("vertrieb_max.docx", 2048).unwrap();
        assert!(upload.file_reference.starts_with("sales-"));

        let upload = parse_cv_upload("lebenslauf.pdf", 2048).unwrap();
        assert!(upload.file_reference.starts_with("generic-"));
    }

    #[test]
    fn test_candidate_label_from_stem() {
        let upload = parse_cv_upload("jane_doe-cv.pdf", 2048).unwrap();
        assert_eq!(upload.candidate_label, "jane doe cv");
    }

    #[test]
    fn test_references_are_unique_per_upload() {
        let a = parse_cv_upload("cv.pdf", 10).unwrap();
        let b = parse_cv_upload("cv.pdf", 10).unwrap();
        assert_ne!(a.file_reference, b.file_reference);
    }
}
