use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::bonus::{BonusQuestionResponse, CreateQuestionRequest, QuestionChoiceResponse},
    error::{Result, StorageError},
    models::{BonusQuestion, Choice, QuestionChoice, Requester},
    repository::{bonus::BonusRepository, competition::CompetitionRepository},
    services::{lock::Lockable, submissions},
};
use uuid::Uuid;

/// Attach options, grade and lock state to each question
async fn describe(pool: &PgPool, questions: Vec<BonusQuestion>) -> Result<Vec<BonusQuestionResponse>> {
    let ids: Vec<Uuid> = questions.iter().map(|q| q.question_id).collect();
    let options = BonusRepository::new(pool).list_question_choices(&ids).await?;
    let mut competition_ids: Vec<Uuid> = questions.iter().map(|q| q.competition_id).collect();
    competition_ids.sort_unstable();
    competition_ids.dedup();
    let competitions = CompetitionRepository::new(pool)
        .map_by_ids(&competition_ids)
        .await?;

    let mut by_question: HashMap<Uuid, Vec<QuestionChoiceResponse>> = HashMap::new();
    for option in options {
        by_question.entry(option.question_id).or_default().push(option);
    }

    let now = Utc::now();
    questions
        .into_iter()
        .map(|question| -> Result<BonusQuestionResponse> {
            let competition = competitions
                .get(&question.competition_id)
                .ok_or(StorageError::NotFound)?;
            let choices = by_question.remove(&question.question_id).unwrap_or_default();
            let correct_answer = question.correct_choice_id.and_then(|correct| {
                choices
                    .iter()
                    .find(|c| c.question_choice_id == correct)
                    .cloned()
            });

            Ok(BonusQuestionResponse {
                question_id: question.question_id,
                question: question.question,
                competition_id: question.competition_id,
                choices,
                correct_answer,
                is_open: competition.is_open_at(now),
            })
        })
        .collect()
}

pub async fn list_questions(
    pool: &PgPool,
    competition_id: Option<Uuid>,
) -> Result<Vec<BonusQuestionResponse>> {
    let questions = BonusRepository::new(pool)
        .list_questions(competition_id)
        .await?;

    describe(pool, questions).await
}

pub async fn get_question(pool: &PgPool, id: Uuid) -> Result<BonusQuestionResponse> {
    let question = BonusRepository::new(pool).find_question(id).await?;

    describe(pool, vec![question])
        .await?
        .pop()
        .ok_or(StorageError::NotFound)
}

pub async fn create_question(
    pool: &PgPool,
    request: &CreateQuestionRequest,
) -> Result<BonusQuestionResponse> {
    let question = BonusRepository::new(pool).create_question(request).await?;
    tracing::info!(question_id = %question.question_id, "Created bonus question");

    get_question(pool, question.question_id).await
}

pub async fn list_choices(pool: &PgPool) -> Result<Vec<Choice>> {
    BonusRepository::new(pool).list_choices().await
}

pub async fn create_choice(pool: &PgPool, label: &str) -> Result<Choice> {
    let choice = BonusRepository::new(pool).create_choice(label).await?;
    tracing::info!(choice_id = %choice.choice_id, "Added choice {}", choice.label);
    Ok(choice)
}

pub async fn add_question_choice(
    pool: &PgPool,
    question_id: Uuid,
    choice_id: Uuid,
) -> Result<QuestionChoice> {
    let repo = BonusRepository::new(pool);
    let question = repo.find_question(question_id).await?;

    let option = repo
        .add_question_choice(question.question_id, choice_id)
        .await?;
    tracing::info!(
        question_id = %question.question_id,
        question_choice_id = %option.question_choice_id,
        "Offered choice on question"
    );

    Ok(option)
}

/// Grade (or un-grade) a question; scores everywhere follow on the next read
pub async fn set_correct_choice(
    pool: &PgPool,
    requester: &Requester,
    question_id: Uuid,
    question_choice_id: Option<Uuid>,
) -> Result<BonusQuestionResponse> {
    submissions::set_correct_choice(pool, requester, question_id, question_choice_id, Utc::now())
        .await?;
    tracing::info!(
        question_id = %question_id,
        graded = question_choice_id.is_some(),
        "Updated correct choice"
    );

    get_question(pool, question_id).await
}
