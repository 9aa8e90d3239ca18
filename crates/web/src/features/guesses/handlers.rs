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
        guess::{CreateGuessRequest, UpdateGuessRequest},
    },
    models::Guess,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Identity;

use super::services;

#[utoipa::path(
    get,
    path = "/api/guesses",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "The caller's own guesses", body = Vec<Guess>),
        (status = 401, description = "No user identity")
    ),
    tag = "guesses"
)]
pub async fn list_guesses(
    State(db): State<Database>,
    Identity(requester): Identity,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<Guess>>, WebError> {
    let guesses = services::list_guesses(db.pool(), &requester, filter.competition).await?;

    Ok(Json(guesses))
}

#[utoipa::path(
    get,
    path = "/api/guesses/{id}",
    params(
        ("id" = Uuid, Path, description = "Guess ID")
    ),
    responses(
        (status = 200, description = "Guess found", body = Guess),
        (status = 401, description = "No user identity"),
        (status = 404, description = "Guess not found or not owned by the caller")
    ),
    tag = "guesses"
)]
pub async fn get_guess(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let guess = services::get_guess(db.pool(), &requester, id).await?;

    Ok(Json(guess).into_response())
}

#[utoipa::path(
    post,
    path = "/api/guesses",
    request_body = CreateGuessRequest,
    responses(
        (status = 201, description = "Guess accepted", body = Guess),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Match already locked"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "A guess for this match already exists")
    ),
    tag = "guesses"
)]
pub async fn submit_guess(
    State(db): State<Database>,
    Identity(requester): Identity,
    Json(req): Json<CreateGuessRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let guess = services::submit_guess(db.pool(), &requester, &req).await?;

    Ok((StatusCode::CREATED, Json(guess)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/guesses/{id}",
    params(
        ("id" = Uuid, Path, description = "Guess ID")
    ),
    request_body = UpdateGuessRequest,
    responses(
        (status = 200, description = "Guess updated", body = Guess),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Match already locked, or not the caller's guess"),
        (status = 404, description = "Guess not found")
    ),
    tag = "guesses"
)]
pub async fn update_guess(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGuessRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let guess = services::update_guess(db.pool(), &requester, id, &req).await?;

    Ok(Json(guess).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/guesses/{id}",
    params(
        ("id" = Uuid, Path, description = "Guess ID")
    ),
    responses(
        (status = 204, description = "Guess deleted"),
        (status = 401, description = "No user identity"),
        (status = 403, description = "Match already locked, or not the caller's guess"),
        (status = 404, description = "Guess not found")
    ),
    tag = "guesses"
)]
pub async fn delete_guess(
    State(db): State<Database>,
    Identity(requester): Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_guess(db.pool(), &requester, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
