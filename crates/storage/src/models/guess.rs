use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One user's score prediction for one match
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Guess {
    pub guess_id: Uuid,
    pub user_id: String,
    pub match_id: Uuid,
    pub guess_home: i32,
    pub guess_away: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
