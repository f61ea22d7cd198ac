use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::directory::{TeamDirectory, TeamId};
use super::service::{
    EvaluationRequest, RankingRequest, RecommendationRequest, SynergyServiceError,
    TeamSynergyService,
};

/// Router builder exposing the scoring, ranking and recommendation endpoints.
pub fn synergy_router<D>(service: Arc<TeamSynergyService<D>>) -> Router
where
    D: TeamDirectory + 'static,
{
    Router::new()
        .route("/api/v1/teams/evaluate", post(evaluate_handler::<D>))
        .route("/api/v1/teams/rank", post(rank_handler::<D>))
        .route(
            "/api/v1/teams/:team_id/recommendations",
            post(recommendations_handler::<D>),
        )
        .route("/api/v1/teams/:team_id/gaps", get(gaps_handler::<D>))
        .with_state(service)
}

pub(crate) async fn evaluate_handler<D>(
    State(service): State<Arc<TeamSynergyService<D>>>,
    Json(request): Json<EvaluationRequest>,
) -> Response
where
    D: TeamDirectory + 'static,
{
    match service.evaluate(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rank_handler<D>(
    State(service): State<Arc<TeamSynergyService<D>>>,
    Json(request): Json<RankingRequest>,
) -> Response
where
    D: TeamDirectory + 'static,
{
    match service.rank(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<D>(
    State(service): State<Arc<TeamSynergyService<D>>>,
    Path(team_id): Path<String>,
    body: Bytes,
) -> Response
where
    D: TeamDirectory + 'static,
{
    let request = match recommendation_request(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.recommend_members(&TeamId(team_id), request) {
        Ok(recommendations) => (StatusCode::OK, Json(recommendations)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn gaps_handler<D>(
    State(service): State<Arc<TeamSynergyService<D>>>,
    Path(team_id): Path<String>,
) -> Response
where
    D: TeamDirectory + 'static,
{
    match service.team_gaps(&TeamId(team_id)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

/// An empty body means "use the configured defaults"; anything else must decode.
fn recommendation_request(body: &[u8]) -> Result<RecommendationRequest, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RecommendationRequest::default());
    }

    Json::<RecommendationRequest>::from_bytes(body)
        .map(|Json(request)| request)
        .map_err(|rejection| {
            let payload = json!({
                "error": rejection.body_text(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        })
}

fn error_response(error: SynergyServiceError) -> Response {
    let status = match &error {
        SynergyServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SynergyServiceError::TeamNotFound(_)
        | SynergyServiceError::EmptyTeam(_)
        | SynergyServiceError::NoCandidates(_) => StatusCode::NOT_FOUND,
        SynergyServiceError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
