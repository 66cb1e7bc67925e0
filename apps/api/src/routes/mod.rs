pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers::handle_career_plan;
use crate::cv::handlers::handle_render_cv;
use crate::jobs::handlers::handle_list_jobs;
use crate::state::AppState;
use crate::summary::handlers::handle_generate_summary;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/career-plan", post(handle_career_plan))
        .route("/api/generate-summary", post(handle_generate_summary))
        .route("/api/jobs", get(handle_list_jobs))
        .route("/api/cv/render", post(handle_render_cv))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{CompletionProvider, DisabledProvider, LlmError};

    struct ScriptedProvider(String);

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn app_with(provider: Arc<dyn CompletionProvider>) -> Router {
        build_router(AppState {
            config: Config::default(),
            llm: provider,
        })
    }

    fn offline_app() -> Router {
        app_with(Arc::new(DisabledProvider))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_career_plan_fallback_when_provider_disabled() {
        let request = post_json(
            "/api/career-plan",
            r#"{"skills": ["React", "Premiere Pro"], "sessionId": "session_1_abc"}"#,
        );
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"], "Video Editor");
        assert_eq!(body["placementProbability"], 30);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 4);
        assert_eq!(body["skillGap"]["current"], json!(["React", "Premiere Pro"]));
    }

    #[tokio::test]
    async fn test_career_plan_without_session_id_is_accepted() {
        let request = post_json("/api/career-plan", r#"{"skills": ["Java"]}"#);
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"], "Java Developer");
    }

    #[tokio::test]
    async fn test_career_plan_empty_skills_is_400() {
        let request = post_json("/api/career-plan", r#"{"skills": [], "sessionId": "s"}"#);
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Skills are required");
    }

    #[tokio::test]
    async fn test_career_plan_missing_or_null_skills_is_400() {
        for raw in [r#"{}"#, r#"{"skills": null}"#] {
            let (status, _) = send_json(offline_app(), post_json("/api/career-plan", raw)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        }
    }

    #[tokio::test]
    async fn test_career_plan_malformed_body_is_500() {
        let request = post_json("/api/career-plan", "{not json");
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_career_plan_returns_remote_json_verbatim() {
        let provider = ScriptedProvider(
            "```json\n{\"career\": \"Data Engineer\", \"placementProbability\": 90}\n```".to_string(),
        );
        let request = post_json("/api/career-plan", r#"{"skills": ["SQL"]}"#);
        let (status, body) = send_json(app_with(Arc::new(provider)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"career": "Data Engineer", "placementProbability": 90})
        );
    }

    #[tokio::test]
    async fn test_generate_summary_fallback() {
        let request = post_json(
            "/api/generate-summary",
            r#"{"name": "Asha", "skills": ["HTML", "CSS", "JavaScript", "React", "Git"]}"#,
        );
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.starts_with("Motivated entry-level professional"));
        assert!(summary.contains("HTML, CSS, JavaScript, and 2 more"));
    }

    #[tokio::test]
    async fn test_generate_summary_uses_remote_text() {
        let provider = ScriptedProvider("Detail-oriented analyst.".to_string());
        let request = post_json(
            "/api/generate-summary",
            r#"{"name": "Asha", "skills": ["SQL"], "experience": "1 year"}"#,
        );
        let (status, body) = send_json(app_with(Arc::new(provider)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "Detail-oriented analyst.");
    }

    #[tokio::test]
    async fn test_generate_summary_requires_name_and_skills() {
        for raw in [
            r#"{"skills": ["SQL"]}"#,
            r#"{"name": "", "skills": ["SQL"]}"#,
            r#"{"name": "   ", "skills": ["SQL"]}"#,
            r#"{"name": "Asha", "skills": []}"#,
            r#"{"name": "Asha"}"#,
        ] {
            let (status, body) =
                send_json(offline_app(), post_json("/api/generate-summary", raw)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
            assert_eq!(body["error"], "Name and skills are required");
        }
    }

    #[tokio::test]
    async fn test_jobs_listing_filters() {
        let request = Request::builder()
            .uri("/api/jobs?q=sql&competition=High")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["jobs"][0]["salaryRange"], "₹3 - ₹5 LPA");
        assert_eq!(body["jobs"][0]["competition"], "High");
    }

    #[tokio::test]
    async fn test_jobs_listing_all_and_unknown_competition() {
        let request = Request::builder()
            .uri("/api/jobs?competition=all")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);

        let request = Request::builder()
            .uri("/api/jobs?competition=Extreme")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cv_render_returns_html() {
        let request = post_json(
            "/api/cv/render",
            r#"{"name": "Asha <Rao>", "skills": ["SQL"]}"#,
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h1>Asha &lt;Rao&gt;</h1>"));
    }

    #[tokio::test]
    async fn test_cv_render_requires_name() {
        let request = post_json("/api/cv/render", r#"{"skills": ["SQL"]}"#);
        let (status, body) = send_json(offline_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required");
    }
}
