use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::job_keywords::extract_job_keywords;
use crate::analysis::scoring::calculate_score;
use crate::analysis::suggestions::generate_suggestions;
use crate::analysis::upload::{parse_upload, ResumeUpload};
use crate::analysis::KeywordSet;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::nlp::Annotator;
use crate::state::AppState;

const LOG_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub score: f64,
    pub matched_keywords: KeywordSet,
    pub missing_keywords: KeywordSet,
    pub suggestions: Vec<String>,
}

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    // Every event below, including those from `analyze`, carries this id.
    let request_id = Uuid::new_v4();
    async move {
        let form = parse_upload(multipart).await?;
        info!("Uploaded file name: {}", form.resume.filename);
        debug!("Job description: {}...", preview(&form.job_description));

        let resume_text = decode_resume(form.resume).await?;
        debug!("Parsed resume text: {}...", preview(&resume_text));

        let response =
            analyze(&resume_text, &form.job_description, state.annotator.as_ref()).await?;
        info!(
            score = response.score,
            suggestions = response.suggestions.len(),
            "Analysis complete"
        );

        Ok(Json(response))
    }
    .instrument(info_span!("analysis", %request_id))
    .await
}

/// Runs keyword extraction, scoring and suggestions over decoded resume text.
pub async fn analyze(
    resume_text: &str,
    job_description: &str,
    annotator: &dyn Annotator,
) -> Result<AnalysisResponse, AppError> {
    let job_keywords = extract_job_keywords(job_description, annotator).await?;
    debug!("Parsed job keywords: {job_keywords:?}");

    let result = calculate_score(resume_text, &job_keywords);
    info!(
        "ATS score: {} ({} matched, {} missing)",
        result.score,
        result.matched.len(),
        result.missing.len()
    );

    let suggestions =
        generate_suggestions(&result.matched, &result.missing, resume_text, &job_keywords);

    Ok(AnalysisResponse {
        score: result.score,
        matched_keywords: result.matched,
        missing_keywords: result.missing,
        suggestions,
    })
}

/// Document decoding is CPU-bound; spawn_blocking to avoid blocking the async executor.
async fn decode_resume(upload: ResumeUpload) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || extract_text(&upload.filename, &upload.data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}")))??;
    Ok(text)
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
