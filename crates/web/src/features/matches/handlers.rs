use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::CompetitionFilter,
        matches::{CreateMatchRequest, MatchResponse, RecordResultRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "Matches in kick-off order", body = Vec<MatchResponse>)
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(db): State<Database>,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<MatchResponse>>, WebError> {
    let matches = services::list_matches(db.pool(), filter.competition).await?;

    Ok(Json(matches))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let game = services::get_match(db.pool(), id).await?;

    Ok(Json(game).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match scheduled", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team or competition not found")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(db): State<Database>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_teams()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let game = services::create_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(game)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/matches/{id}/result",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = RecordResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result recorded", body = MatchResponse),
        (status = 400, description = "Only one score given, or a negative score"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn record_result(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = req
        .result()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let game = services::record_result(db.pool(), &requester, id, result).await?;

    Ok(Json(game).into_response())
}
