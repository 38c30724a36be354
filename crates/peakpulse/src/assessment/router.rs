use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::capture::{AnswerInput, CaptureError};
use super::domain::SessionId;
use super::report::{catalog_sections, RecommendationView};
use super::repository::{RepositoryError, SessionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

/// Body accepted when a session is started.
#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default = "default_render")]
    pub render_defaults: bool,
}

impl Default for StartSessionRequest {
    fn default() -> Self {
        Self {
            render_defaults: default_render(),
        }
    }
}

fn default_render() -> bool {
    true
}

/// Body accepted when an answer is captured.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub value: AnswerInput,
}

/// Router builder exposing the questionnaire and scoring endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(catalog_handler::<R>))
        .route("/api/v1/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id",
            get(progress_handler::<R>).delete(finish_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/answers/:key",
            put(answer_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/analyze",
            post(analyze_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let sections = catalog_sections(service.catalog());
    (StatusCode::OK, Json(json!({ "sections": sections }))).into_response()
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    request: Option<Json<StartSessionRequest>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let request = request.map(|Json(body)| body).unwrap_or_default();
    match service.start(request.render_defaults) {
        Ok(session) => {
            let view = session.progress(service.catalog());
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.progress(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path((session_id, key)): Path<(String, String)>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.answer(&SessionId(session_id), &key, request.value) {
        Ok(value) => (StatusCode::OK, Json(json!({ "key": key, "value": value }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.analyze(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, Json(RecommendationView::from(&result))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finish_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.finish(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Capture(CaptureError::UnknownQuestion(_)) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Capture(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
