use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::team::TeamResponse;
use crate::models::{Match, Team};
use crate::services::lock::Lockable;

/// Request payload for scheduling a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    pub team_home_id: Uuid,
    pub team_away_id: Uuid,
    pub match_date: DateTime<Utc>,

    #[validate(length(
        min = 1,
        max = 2,
        message = "Group must be 1 or 2 characters"
    ))]
    pub group_label: String,

    #[validate(length(max = 200))]
    pub venue: Option<String>,

    pub competition_id: Uuid,
}

impl CreateMatchRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_teams(&self) -> Result<(), &'static str> {
        if self.team_home_id == self.team_away_id {
            return Err("A team cannot play against itself");
        }
        Ok(())
    }
}

/// Request payload for recording (or clearing) a final score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub score_home: Option<i32>,

    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub score_away: Option<i32>,
}

impl RecordResultRequest {
    /// Both scores or neither; a half-entered result is rejected
    pub fn result(&self) -> Result<Option<(i32, i32)>, &'static str> {
        match (self.score_home, self.score_away) {
            (Some(home), Some(away)) => Ok(Some((home, away))),
            (None, None) => Ok(None),
            _ => Err("score_home and score_away must be set together"),
        }
    }
}

/// Match with both teams embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub team_home: TeamResponse,
    pub team_away: TeamResponse,
    pub match_date: DateTime<Utc>,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub group_label: String,
    pub venue: Option<String>,
    pub competition_id: Uuid,
    /// Whether guesses are still accepted
    pub is_open: bool,
}

impl MatchResponse {
    pub fn new(game: Match, home: Team, away: Team, now: DateTime<Utc>) -> Self {
        let is_open = game.is_open_at(now);
        Self {
            match_id: game.match_id,
            team_home: home.into(),
            team_away: away.into(),
            match_date: game.match_date,
            score_home: game.score_home,
            score_away: game.score_away,
            group_label: game.group_label,
            venue: game.venue,
            competition_id: game.competition_id,
            is_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_requires_both_scores() {
        let half = RecordResultRequest {
            score_home: Some(2),
            score_away: None,
        };
        assert!(half.result().is_err());
    }

    #[test]
    fn test_result_can_be_cleared() {
        let cleared = RecordResultRequest {
            score_home: None,
            score_away: None,
        };
        assert_eq!(cleared.result(), Ok(None));
    }

    #[test]
    fn test_negative_score_fails_validation() {
        let negative = RecordResultRequest {
            score_home: Some(-1),
            score_away: Some(0),
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_team_cannot_play_itself() {
        let team = Uuid::new_v4();
        let request = CreateMatchRequest {
            team_home_id: team,
            team_away_id: team,
            match_date: Utc::now(),
            group_label: "B".to_string(),
            venue: None,
            competition_id: Uuid::new_v4(),
        };
        assert!(request.validate_teams().is_err());
    }
}
