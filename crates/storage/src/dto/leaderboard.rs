use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A guess joined with its match's final score (null while unplayed)
#[derive(Debug, Clone, FromRow)]
pub struct GuessRecord {
    pub user_id: String,
    pub guess_home: i32,
    pub guess_away: i32,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
}

impl GuessRecord {
    pub fn result(&self) -> Option<(i32, i32)> {
        self.score_home.zip(self.score_away)
    }
}

/// A bonus answer joined with its question's correct choice
#[derive(Debug, Clone, FromRow)]
pub struct BonusRecord {
    pub user_id: String,
    pub question_choice_id: Option<Uuid>,
    pub correct_choice_id: Option<Uuid>,
}

/// One ranked row of the scoreboard
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user: String,
    pub points: i64,
    pub match_points: i64,
    pub bonus_points: i64,
    pub exact: i64,
    pub one_score: i64,
    pub result_correct: i64,
    pub correct_bonus: i64,
    /// Scored guesses on played matches plus answered bonus questions
    pub total_guesses: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub win_percentage: Decimal,
    /// Share of scored guesses and answers that hit the exact score
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub accuracy: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub avg_points: Decimal,
}
