//! Plain-text extraction from uploaded PDF resumes.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the text layer of a PDF.
///
/// Parsing is CPU-bound and `pdf-extract` can panic on malformed files, so it
/// runs on the blocking pool and a panic surfaces as an extraction error.
pub async fn extract_pdf_text(pdf: Bytes) -> Result<String, AppError> {
    let size = pdf.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| AppError::PdfExtraction(format!("extraction task failed: {e}")))?
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;

    let text = collapse_blank_lines(&text);
    debug!("Extracted {} chars from {} byte PDF", text.len(), size);

    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The PDF has no extractable text (is it a scanned image?)".to_string(),
        ));
    }
    Ok(text)
}

/// pdf-extract emits runs of empty lines between text objects.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_lines() {
        let raw = "\n\nJane Doe\n\n\n\nExperience   \n  \nAcme Corp\n\n";
        assert_eq!(collapse_blank_lines(raw), "Jane Doe\n\nExperience\n\nAcme Corp");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_an_extraction_error() {
        let result = extract_pdf_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(matches!(result, Err(AppError::PdfExtraction(_))));
    }
}
