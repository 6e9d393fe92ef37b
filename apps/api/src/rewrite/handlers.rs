//! Axum route handlers for the Resume Rewrite API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::rewrite::extract::extract_pdf_text;
use crate::rewrite::rewriter::{rewrite_resume, RewriteResponse};
use crate::state::AppState;

/// Upload limit for the rewrite route, PDF included.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Fields of the multipart rewrite form.
#[derive(Debug, Default)]
pub struct RewriteForm {
    pub resume_pdf: Option<Bytes>,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

impl RewriteForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = RewriteForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => form.resume_pdf = Some(field_bytes(field).await?),
                "resume_text" => form.resume_text = Some(field_text(field).await?),
                "job_description" => form.job_description = Some(field_text(field).await?),
                // unknown fields are ignored
                _ => {}
            }
        }

        Ok(form)
    }

    /// Resume text, preferring a non-blank `resume_text` over the PDF.
    async fn resume(&mut self) -> Result<String, AppError> {
        if let Some(text) = self.resume_text.take().filter(|t| !t.trim().is_empty()) {
            return Ok(text);
        }
        match self.resume_pdf.take() {
            Some(pdf) if !pdf.is_empty() => extract_pdf_text(pdf).await,
            _ => Err(AppError::Validation(
                "Provide a resume PDF in 'resume' or plain text in 'resume_text'".to_string(),
            )),
        }
    }
}

async fn field_bytes(field: Field<'_>) -> Result<Bytes, AppError> {
    field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))
}

async fn field_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// POST /api/v1/resume/rewrite
///
/// Multipart form: `job_description` plus either `resume` (PDF) or `resume_text`.
/// Returns the resume rewritten for that job as plain text.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RewriteResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::RewriteUnavailable)?;

    let mut form = RewriteForm::read(multipart).await?;
    let job_description = form
        .job_description
        .take()
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let resume_text = form.resume().await?;

    let response = rewrite_resume(llm, &resume_text, &job_description).await?;
    Ok(Json(response))
}
