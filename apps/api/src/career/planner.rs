//! Career Planner: the AI-or-fallback boundary for `POST /api/career-plan`.
//!
//! Flow: ask the completion provider → extract the outermost JSON object →
//! parse → return verbatim. Any failure along the way is logged and replaced
//! by the deterministic classifier. There is exactly one remote attempt.
//!
//! Remote JSON is trusted as-is unless strict mode is enabled, in which case
//! it must also satisfy the invariants the fallback guarantees.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::career::classifier::{determine_career, PROBABILITY_CEILING};
use crate::career::models::CareerPlan;
use crate::career::prompts::{career_plan_user_message, CAREER_PLAN_SYSTEM};
use crate::llm_client::{extract_json_object, CompletionProvider, LlmError};

/// Result of planning: either the remote JSON or the local fallback plan.
/// Serializes as the bare inner body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlanOutcome {
    Remote(Value),
    Fallback(CareerPlan),
}

impl PlanOutcome {
    pub fn source(&self) -> &'static str {
        match self {
            PlanOutcome::Remote(_) => "remote",
            PlanOutcome::Fallback(_) => "fallback",
        }
    }
}

/// Why a remote attempt did not produce a usable plan.
#[derive(Debug, Error)]
pub enum RemotePlanError {
    #[error("completion failed: {0}")]
    Provider(#[from] LlmError),

    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("reply JSON did not parse: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reply rejected in strict mode: {0}")]
    Rejected(String),
}

/// Produces a career plan for a non-empty skill list. Never fails.
pub async fn plan_career(
    provider: &dyn CompletionProvider,
    skills: &[String],
    strict: bool,
) -> PlanOutcome {
    match remote_plan(provider, skills, strict).await {
        Ok(value) => PlanOutcome::Remote(value),
        Err(e) => {
            warn!(provider = provider.name(), "Remote career plan unavailable, using rules: {e}");
            let plan = determine_career(skills);
            info!(
                "Fallback career plan: {} ({}%)",
                plan.career, plan.placement_probability
            );
            PlanOutcome::Fallback(plan)
        }
    }
}

async fn remote_plan(
    provider: &dyn CompletionProvider,
    skills: &[String],
    strict: bool,
) -> Result<Value, RemotePlanError> {
    let reply = provider
        .complete(CAREER_PLAN_SYSTEM, &career_plan_user_message(skills))
        .await?;

    let json = extract_json_object(&reply).ok_or(RemotePlanError::NoJsonObject)?;
    let value: Value = serde_json::from_str(json)?;

    if strict {
        validate_remote_plan(&value).map_err(RemotePlanError::Rejected)?;
    }

    Ok(value)
}

/// Checks a remote reply against the guarantees of the fallback path:
/// the career-plan schema, probability in `[0, 75]`, four roadmap steps and
/// `missing ⊆ required`.
pub fn validate_remote_plan(value: &Value) -> Result<(), String> {
    let plan: CareerPlan =
        serde_json::from_value(value.clone()).map_err(|e| format!("schema mismatch: {e}"))?;

    if !(0..=PROBABILITY_CEILING).contains(&plan.placement_probability) {
        return Err(format!(
            "placementProbability {} outside 0..={PROBABILITY_CEILING}",
            plan.placement_probability
        ));
    }
    if plan.roadmap.len() != 4 {
        return Err(format!("roadmap has {} steps, expected 4", plan.roadmap.len()));
    }
    if let Some(extra) = plan
        .skill_gap
        .missing
        .iter()
        .find(|m| !plan.skill_gap.required.contains(*m))
    {
        return Err(format!("missing skill '{extra}' is not in required"));
    }
    Ok(())
}
