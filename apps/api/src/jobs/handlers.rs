use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::listing::{filter_jobs, Competition, Job, JOBS};

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// `Low`, `Medium`, `High`, or `all`.
    #[serde(default)]
    pub competition: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<&'static Job>,
    pub total: usize,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let competition = match params.competition.as_deref() {
        None | Some("") | Some("all") => None,
        Some(level) => Some(level.parse::<Competition>().map_err(AppError::Validation)?),
    };

    let jobs = filter_jobs(JOBS, params.q.as_deref().unwrap_or_default(), competition);
    Ok(Json(JobsResponse {
        total: jobs.len(),
        jobs,
    }))
}
