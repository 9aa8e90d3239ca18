use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Entry in the global pool of answer labels
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Choice {
    pub choice_id: Uuid,
    pub label: String,
}

/// A trivia question tied to a competition. `correct_choice_id` points at a
/// [`QuestionChoice`] of this question once an administrator grades it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BonusQuestion {
    pub question_id: Uuid,
    pub question: String,
    pub competition_id: Uuid,
    pub correct_choice_id: Option<Uuid>,
}

/// Edge offering a pool [`Choice`] as an option of one question
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct QuestionChoice {
    pub question_choice_id: Uuid,
    pub question_id: Uuid,
    pub choice_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BonusAnswer {
    pub answer_id: Uuid,
    pub user_id: String,
    pub question_id: Uuid,
    /// Cleared answers keep their row with no selection
    pub question_choice_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
