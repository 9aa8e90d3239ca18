use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        bonus::{
            AddQuestionChoiceRequest, BonusQuestionResponse, CreateChoiceRequest,
            CreateQuestionRequest, SetCorrectChoiceRequest,
        },
        common::CompetitionFilter,
    },
    models::{Choice, QuestionChoice},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/bonus-questions",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "Bonus questions with their choices", body = Vec<BonusQuestionResponse>)
    ),
    tag = "bonus"
)]
pub async fn list_questions(
    State(db): State<Database>,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<BonusQuestionResponse>>, WebError> {
    let questions = services::list_questions(db.pool(), filter.competition).await?;

    Ok(Json(questions))
}

#[utoipa::path(
    get,
    path = "/api/bonus-questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = BonusQuestionResponse),
        (status = 404, description = "Question not found")
    ),
    tag = "bonus"
)]
pub async fn get_question(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let question = services::get_question(db.pool(), id).await?;

    Ok(Json(question).into_response())
}

#[utoipa::path(
    post,
    path = "/api/bonus-questions",
    request_body = CreateQuestionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Question created", body = BonusQuestionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "bonus"
)]
pub async fn create_question(
    State(db): State<Database>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let question = services::create_question(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(question)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/bonus-questions/{id}/choices",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    request_body = AddQuestionChoiceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Choice offered on the question", body = QuestionChoice),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Question or choice not found"),
        (status = 409, description = "Choice already offered on this question")
    ),
    tag = "bonus"
)]
pub async fn add_question_choice(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddQuestionChoiceRequest>,
) -> Result<Response, WebError> {
    let option = services::add_question_choice(db.pool(), id, req.choice_id).await?;

    Ok((StatusCode::CREATED, Json(option)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/bonus-questions/{id}/set-correct",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    request_body = SetCorrectChoiceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Question graded", body = BonusQuestionResponse),
        (status = 400, description = "Choice is not offered by this question"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Question not found")
    ),
    tag = "bonus"
)]
pub async fn set_correct_choice(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<SetCorrectChoiceRequest>,
) -> Result<Response, WebError> {
    let question =
        services::set_correct_choice(db.pool(), &requester, id, req.question_choice_id).await?;

    Ok(Json(question).into_response())
}

#[utoipa::path(
    get,
    path = "/api/bonus-choices",
    responses(
        (status = 200, description = "The shared pool of choice labels", body = Vec<Choice>)
    ),
    tag = "bonus"
)]
pub async fn list_choices(State(db): State<Database>) -> Result<Json<Vec<Choice>>, WebError> {
    let choices = services::list_choices(db.pool()).await?;

    Ok(Json(choices))
}

#[utoipa::path(
    post,
    path = "/api/bonus-choices",
    request_body = CreateChoiceRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Choice added to the pool", body = Choice),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "bonus"
)]
pub async fn create_choice(
    State(db): State<Database>,
    Json(req): Json<CreateChoiceRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let choice = services::create_choice(db.pool(), &req.label).await?;

    Ok((StatusCode::CREATED, Json(choice)).into_response())
}
