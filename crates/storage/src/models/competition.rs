use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub competition_id: Uuid,
    pub name: String,
    pub short_name: String,
    /// Bonus answers for this competition lock at this instant
    pub start_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
