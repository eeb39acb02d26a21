//! Resume text extraction — thin I/O glue in front of session creation.
//! Only PDF uploads are supported; the interview core only ever sees the
//! extracted plain text.

use tracing::info;

use crate::errors::AppError;

/// Extracts plain text from an uploaded resume. Rejects non-PDF files,
/// unreadable PDFs, and PDFs that yield no text at all.
pub fn extract_resume_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Unsupported file format. Please use PDF".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::Validation(format!("Error loading resume: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation(
            "Resume contained no extractable text".to_string(),
        ));
    }

    info!("Extracted {} characters of resume text from {filename}", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_uploads() {
        let err = extract_resume_text("resume.docx", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_unparseable_pdf_bytes() {
        let err = extract_resume_text("resume.pdf", b"garbage").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        // Reaches the parser rather than the format guard.
        let err = extract_resume_text("RESUME.PDF", b"garbage").unwrap_err();
        let AppError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Error loading resume"));
    }
}
