use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::scoring::Evaluation;
use crate::interview::session::InterviewSummary;
use crate::interview::stage::Stage;
use crate::resume::extract_resume_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub session_id: Uuid,
    pub message: String,
    pub stage: Stage,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub session_id: Uuid,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub question: String,
    pub stage: Stage,
    pub evaluation: Option<Evaluation>,
}

#[derive(Debug, Serialize)]
pub struct EndResponse {
    pub message: String,
    pub summary: InterviewSummary,
}

/// POST /api/v1/interview/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }

    let (session_id, message) = state.sessions.create(req.resume_text).await;
    Ok(Json(StartResponse {
        session_id,
        message: message.to_string(),
        stage: Stage::Introduction,
    }))
}

/// POST /api/v1/interview/upload-resume
///
/// Multipart upload with a single `file` field (PDF only). Extracts the
/// resume text and opens a session around it.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StartResponse>, AppError> {
    let mut resume_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        info!("Received resume upload: {filename} ({} bytes)", data.len());
        resume_text = Some(extract_resume_text(&filename, &data)?);
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    let (session_id, message) = state.sessions.create(resume_text).await;
    Ok(Json(StartResponse {
        session_id,
        message: message.to_string(),
        stage: Stage::Introduction,
    }))
}

/// POST /api/v1/interview/respond
///
/// One candidate turn. A collaborator failure while scoring degrades inside
/// the session; a failure while generating the next question surfaces here
/// as an LLM error, since the turn cannot proceed without a question.
pub async fn handle_respond(
    State(state): State<AppState>,
    Json(req): Json<RespondRequest>,
) -> Result<Json<RespondResponse>, AppError> {
    let session = state
        .sessions
        .get(req.session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview session {} not found", req.session_id)))?;

    let mut session = session.lock().await;
    let outcome = session
        .process_turn(state.llm.as_ref(), &req.response)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    Ok(Json(RespondResponse {
        question: outcome.question,
        stage: outcome.stage,
        evaluation: outcome.evaluation,
    }))
}

/// DELETE /api/v1/interview/:session_id
///
/// Ends the interview: computes the final summary from whatever evaluations
/// exist, then discards the session.
pub async fn handle_end(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<EndResponse>, AppError> {
    let session = state
        .sessions
        .remove(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview session {session_id} not found")))?;

    let session = session.lock().await;
    let summary = session.summarize(state.llm.as_ref()).await;
    info!(
        "Interview session {session_id} ended (started {}, {} evaluations)",
        session.started_at(),
        session.evaluations().len()
    );

    Ok(Json(EndResponse {
        message: "Interview session ended successfully".to_string(),
        summary,
    }))
}

/// GET /api/v1/interview/:session_id/summary
///
/// Non-destructive summary of the session so far.
pub async fn handle_get_summary(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewSummary>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview session {session_id} not found")))?;

    let session = session.lock().await;
    Ok(Json(session.summarize(state.llm.as_ref()).await))
}
