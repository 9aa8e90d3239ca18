use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::guess::{CreateGuessRequest, UpdateGuessRequest},
    error::Result,
    models::{Guess, Requester},
    services::submissions,
};
use uuid::Uuid;

pub async fn list_guesses(
    pool: &PgPool,
    requester: &Requester,
    competition_id: Option<Uuid>,
) -> Result<Vec<Guess>> {
    submissions::list_guesses(pool, requester, competition_id).await
}

pub async fn get_guess(pool: &PgPool, requester: &Requester, id: Uuid) -> Result<Guess> {
    submissions::get_guess(pool, requester, id).await
}

pub async fn submit_guess(
    pool: &PgPool,
    requester: &Requester,
    request: &CreateGuessRequest,
) -> Result<Guess> {
    let guess = submissions::submit_guess(pool, requester, request, Utc::now()).await?;

    tracing::info!(
        guess_id = %guess.guess_id,
        match_id = %guess.match_id,
        user = %guess.user_id,
        "Accepted guess {}-{}",
        guess.guess_home,
        guess.guess_away
    );

    Ok(guess)
}

pub async fn update_guess(
    pool: &PgPool,
    requester: &Requester,
    id: Uuid,
    request: &UpdateGuessRequest,
) -> Result<Guess> {
    let guess = submissions::update_guess(pool, requester, id, request, Utc::now()).await?;

    tracing::info!(
        guess_id = %guess.guess_id,
        user = %guess.user_id,
        "Updated guess to {}-{}",
        guess.guess_home,
        guess.guess_away
    );

    Ok(guess)
}

pub async fn delete_guess(pool: &PgPool, requester: &Requester, id: Uuid) -> Result<()> {
    submissions::delete_guess(pool, requester, id, Utc::now()).await?;
    tracing::info!(guess_id = %id, "Deleted guess");
    Ok(())
}
