use axum::{extract::rejection::JsonRejection, response::Html, Json};

use crate::cv::template::{render_cv_html, CvDocument};
use crate::errors::AppError;

/// POST /api/cv/render
///
/// Returns the printable CV as `text/html`.
pub async fn handle_render_cv(
    payload: Result<Json<CvDocument>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let Json(doc) = payload?;

    if doc.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    Ok(Html(render_cv_html(&doc)))
}
