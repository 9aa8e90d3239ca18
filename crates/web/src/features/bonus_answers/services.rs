use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::bonus::SubmitBonusAnswerRequest,
    error::Result,
    models::{BonusAnswer, Requester},
    services::submissions,
};
use uuid::Uuid;

pub async fn list_answers(
    pool: &PgPool,
    requester: &Requester,
    competition_id: Option<Uuid>,
) -> Result<Vec<BonusAnswer>> {
    submissions::list_bonus_answers(pool, requester, competition_id).await
}

pub async fn get_answer(pool: &PgPool, requester: &Requester, id: Uuid) -> Result<BonusAnswer> {
    submissions::get_bonus_answer(pool, requester, id).await
}

/// Returns the stored answer and whether it was newly created
pub async fn submit_answer(
    pool: &PgPool,
    requester: &Requester,
    request: &SubmitBonusAnswerRequest,
) -> Result<(BonusAnswer, bool)> {
    let (answer, created) = submissions::submit_bonus_answer(
        pool,
        requester,
        request.question_id,
        request.question_choice_id,
        Utc::now(),
    )
    .await?;

    tracing::info!(
        answer_id = %answer.answer_id,
        question_id = %answer.question_id,
        user = %answer.user_id,
        created,
        "Accepted bonus answer"
    );

    Ok((answer, created))
}

pub async fn update_answer(
    pool: &PgPool,
    requester: &Requester,
    id: Uuid,
    question_choice_id: Option<Uuid>,
) -> Result<BonusAnswer> {
    let answer =
        submissions::update_bonus_answer(pool, requester, id, question_choice_id, Utc::now())
            .await?;

    tracing::info!(
        answer_id = %answer.answer_id,
        cleared = question_choice_id.is_none(),
        "Updated bonus answer"
    );

    Ok(answer)
}

pub async fn delete_answer(pool: &PgPool, requester: &Requester, id: Uuid) -> Result<()> {
    submissions::delete_bonus_answer(pool, requester, id, Utc::now()).await?;
    tracing::info!(answer_id = %id, "Deleted bonus answer");
    Ok(())
}
