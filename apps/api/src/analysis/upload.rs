use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

const MISSING_INPUT: &str = "Both resume and job description are required!";

/// An uploaded resume document, not yet decoded.
pub struct ResumeUpload {
    pub filename: String,
    pub data: Bytes,
}

pub struct UploadForm {
    pub resume: ResumeUpload,
    pub job_description: String,
}

/// Reads the upload form. A resume without a filename, or an empty job
/// description, counts as missing. Unknown fields are drained and ignored.
pub async fn parse_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut resume: Option<ResumeUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            RESUME_FIELD => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;
                if !filename.is_empty() {
                    resume = Some(ResumeUpload { filename, data });
                }
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                if !text.is_empty() {
                    job_description = Some(text);
                }
            }
            _ => {
                field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read form field '{name}': {e}"))
                })?;
            }
        }
    }

    match (resume, job_description) {
        (Some(resume), Some(job_description)) => Ok(UploadForm {
            resume,
            job_description,
        }),
        _ => Err(AppError::Validation(MISSING_INPUT.to_string())),
    }
}
