use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        bonus::{SubmitBonusAnswerRequest, UpdateBonusAnswerRequest},
        common::CompetitionFilter,
    },
    models::BonusAnswer,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/bonus-answers",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "The caller's own bonus answers", body = Vec<BonusAnswer>),
        (status = 401, description = "No user identity")
    ),
    tag = "bonus-answers"
)]
pub async fn list_answers(
    State(db): State<Database>,
    Identity(requester): Identity,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<BonusAnswer>>, WebError> {
    let answers = services::list_answers(db.pool(), &requester, filter.competition).await?;

    Ok(Json(answers))
}

#[utoipa::path(
    get,
    path = "/api/bonus-answers/{id}",
    params(
        ("id" = Uuid, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer found", body = BonusAnswer),
        (status = 401, description = "No user identity"),
        (status = 404, description = "Answer not found or not owned by the caller")
    ),
    tag = "bonus-answers"
)]
pub async fn get_answer(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let answer = services::get_answer(db.pool(), &requester, id).await?;

    Ok(Json(answer).into_response())
}

#[utoipa::path(
    post,
    path = "/api/bonus-answers",
    request_body = SubmitBonusAnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = BonusAnswer),
        (status = 200, description = "Existing answer replaced", body = BonusAnswer),
        (status = 400, description = "Choice is not offered by this question"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Competition already started"),
        (status = 404, description = "Question not found")
    ),
    tag = "bonus-answers"
)]
pub async fn submit_answer(
    State(db): State<Database>,
    Identity(requester): Identity,
    Json(req): Json<SubmitBonusAnswerRequest>,
) -> Result<Response, WebError> {
    let (answer, created) = services::submit_answer(db.pool(), &requester, &req).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(answer)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/bonus-answers/{id}",
    params(
        ("id" = Uuid, Path, description = "Answer ID")
    ),
    request_body = UpdateBonusAnswerRequest,
    responses(
        (status = 200, description = "Answer updated", body = BonusAnswer),
        (status = 400, description = "Choice is not offered by this question"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Competition already started, or not the caller's answer"),
        (status = 404, description = "Answer not found")
    ),
    tag = "bonus-answers"
)]
pub async fn update_answer(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBonusAnswerRequest>,
) -> Result<Response, WebError> {
    let answer =
        services::update_answer(db.pool(), &requester, id, req.question_choice_id).await?;

    Ok(Json(answer).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/bonus-answers/{id}",
    params(
        ("id" = Uuid, Path, description = "Answer ID")
    ),
    responses(
        (status = 204, description = "Answer deleted"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Competition already started, or not the caller's answer"),
        (status = 404, description = "Answer not found")
    ),
    tag = "bonus-answers"
)]
pub async fn delete_answer(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_answer(db.pool(), &requester, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
