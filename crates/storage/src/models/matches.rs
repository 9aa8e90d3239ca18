use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled match. Scores stay null until the match is played and are
/// always set or cleared together.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub team_home_id: Uuid,
    pub team_away_id: Uuid,
    pub match_date: DateTime<Utc>,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub group_label: String,
    pub venue: Option<String>,
    pub competition_id: Uuid,
}

impl Match {
    /// Final score, if the match has been played
    pub fn result(&self) -> Option<(i32, i32)> {
        self.score_home.zip(self.score_away)
    }
}
