//! Axum route handler for the career-plan API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};

use crate::career::planner::{plan_career, PlanOutcome};
use crate::errors::AppError;
use crate::session::SessionId;
use crate::state::AppState;

/// Both fields are optional on the wire so that a missing `skills` is a 400,
/// not a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPlanRequest {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// POST /api/career-plan
///
/// Remote plan when the provider returns parseable JSON, otherwise the
/// rule-based plan. Always 200 for a non-empty skill list.
pub async fn handle_career_plan(
    State(state): State<AppState>,
    payload: Result<Json<CareerPlanRequest>, JsonRejection>,
) -> Result<Json<PlanOutcome>, AppError> {
    let Json(request) = payload?;

    let skills = match request.skills {
        Some(skills) if !skills.is_empty() => skills,
        _ => return Err(AppError::Validation("Skills are required".to_string())),
    };

    let session = SessionId::resolve(request.session_id);
    let span = info_span!("career_plan", session = %session, skills = skills.len());

    let outcome = async move {
        let outcome = plan_career(
            state.llm.as_ref(),
            &skills,
            state.config.strict_remote_plans,
        )
        .await;
        info!("Career plan served from {}", outcome.source());
        outcome
    }
    .instrument(span)
    .await;

    Ok(Json(outcome))
}
