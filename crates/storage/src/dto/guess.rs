use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for submitting a guess
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGuessRequest {
    pub match_id: Uuid,

    #[validate(range(min = 0, max = 999, message = "Score must be between 0 and 999"))]
    pub guess_home: i32,

    #[validate(range(min = 0, max = 999, message = "Score must be between 0 and 999"))]
    pub guess_away: i32,
}

/// Request payload for changing a guess before kick-off
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGuessRequest {
    #[validate(range(min = 0, max = 999, message = "Score must be between 0 and 999"))]
    pub guess_home: i32,

    #[validate(range(min = 0, max = 999, message = "Score must be between 0 and 999"))]
    pub guess_away: i32,
}
