use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for adding a label to the choice pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChoiceRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Label must be between 1 and 200 characters"
    ))]
    pub label: String,
}

/// Request payload for creating a bonus question
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Question must be between 1 and 500 characters"
    ))]
    pub question: String,

    pub competition_id: Uuid,
}

/// Offer an existing pool choice on a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddQuestionChoiceRequest {
    pub choice_id: Uuid,
}

/// Grade a question; `null` marks it ungraded again
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetCorrectChoiceRequest {
    pub question_choice_id: Option<Uuid>,
}

/// Request payload for answering a bonus question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitBonusAnswerRequest {
    pub question_id: Uuid,
    pub question_choice_id: Uuid,
}

/// Change or clear (`null`) the selected option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBonusAnswerRequest {
    pub question_choice_id: Option<Uuid>,
}

/// An option of a question together with its pool label
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct QuestionChoiceResponse {
    pub question_choice_id: Uuid,
    pub question_id: Uuid,
    pub choice_id: Uuid,
    pub label: String,
}

/// Bonus question with its options and grade
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BonusQuestionResponse {
    pub question_id: Uuid,
    pub question: String,
    pub competition_id: Uuid,
    pub choices: Vec<QuestionChoiceResponse>,
    pub correct_answer: Option<QuestionChoiceResponse>,
    /// Whether answers are still accepted
    pub is_open: bool,
}
