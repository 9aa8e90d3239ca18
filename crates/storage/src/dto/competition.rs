use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 20,
        message = "Short name must be between 1 and 20 characters"
    ))]
    pub short_name: String,

    /// Bonus answers lock at this instant
    pub start_date: DateTime<Utc>,
}

/// Response containing competition details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: Uuid,
    pub name: String,
    pub short_name: String,
    pub start_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::Competition> for CompetitionResponse {
    fn from(comp: crate::models::Competition) -> Self {
        Self {
            competition_id: comp.competition_id,
            name: comp.name,
            short_name: comp.short_name,
            start_date: comp.start_date,
            created_at: comp.created_at,
        }
    }
}
