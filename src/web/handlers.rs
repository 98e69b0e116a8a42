// src/web/handlers.rs
use crate::analysis::{AnalysisReport, AnalyzeError, AnalyzeRequest, ResumeAnalyzer};
use crate::web::types::{AppState, ErrorResponse, HealthResponse};
use chrono::Utc;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};
use uuid::Uuid;

pub async fn analyze_resume_handler(
    request: Json<AnalyzeRequest>,
    state: &State<AppState>,
) -> Result<Json<AnalysisReport>, status::Custom<Json<ErrorResponse>>> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        analysis_type = ?request.analysis_type,
        resume_chars = request.resume_text.len(),
        has_job_description = request.job_description.is_some(),
        "Analyzing resume"
    );

    let analyzer = ResumeAnalyzer::new(state.catalog.clone());

    match analyzer.analyze(&request) {
        Ok(report) => {
            info!(
                %request_id,
                score = report.score,
                keywords = report.keywords.len(),
                missing = report.missing_keywords.len(),
                "Analysis complete"
            );
            Ok(Json(report))
        }
        Err(e @ AnalyzeError::EmptyResumeText) => {
            info!(%request_id, "Rejected analysis request: {}", e);
            Err(status::Custom(
                Status::BadRequest,
                Json(ErrorResponse::new(
                    e.to_string(),
                    "VALIDATION_ERROR".to_string(),
                    vec!["Provide the resume text in the 'resumeText' field".to_string()],
                )),
            ))
        }
        Err(e) => {
            error!(%request_id, "Resume analysis failed: {}", e);
            Err(status::Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(
                    "Failed to analyze resume".to_string(),
                    "INTERNAL_ERROR".to_string(),
                    vec!["Try again in a few moments".to_string()],
                )),
            ))
        }
    }
}

/// Self-description for GET requests against the analyze endpoint
pub async fn analyze_info_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Resume Analysis API",
        "endpoints": {
            "POST": "Analyze resume text against job requirements",
            "parameters": {
                "resumeText": "string (required)",
                "jobDescription": "string (optional)",
                "analysisType": "general | job-specific"
            }
        }
    }))
}

pub async fn health_handler(state: &State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        catalog_entries: state.catalog.len(),
    })
}
