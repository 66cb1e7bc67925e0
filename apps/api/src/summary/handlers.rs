//! Axum route handler for the summary API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::summary::composer::compose_summary;
use crate::summary::prompts::{summary_user_message, SUMMARY_SYSTEM};

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /api/generate-summary
///
/// Remote summary text when the provider answers, otherwise the template.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(request) = payload?;

    let (name, skills) = match (request.name, request.skills) {
        (Some(name), Some(skills)) if !name.trim().is_empty() && !skills.is_empty() => {
            (name, skills)
        }
        _ => {
            return Err(AppError::Validation(
                "Name and skills are required".to_string(),
            ))
        }
    };
    let experience = request.experience.as_deref();

    let summary = match state
        .llm
        .complete(
            SUMMARY_SYSTEM,
            &summary_user_message(&name, &skills, experience),
        )
        .await
    {
        Ok(text) => {
            info!("Summary served from remote provider");
            text
        }
        Err(e) => {
            warn!(provider = state.llm.name(), "Remote summary unavailable, using template: {e}");
            compose_summary(&skills, experience)
        }
    };

    Ok(Json(SummaryResponse { summary }))
}
