use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::{BonusRecord, GuessRecord};
use crate::error::Result;

/// Raw scoring inputs; points are never stored, always derived from these rows
pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every guess in scope with its match's current score
    pub async fn guess_records(&self, competition_id: Option<Uuid>) -> Result<Vec<GuessRecord>> {
        let records = sqlx::query_as::<_, GuessRecord>(
            r#"
            SELECT g.user_id, g.guess_home, g.guess_away, m.score_home, m.score_away
            FROM guesses g
            INNER JOIN matches m ON m.match_id = g.match_id
            WHERE ($1::uuid IS NULL OR m.competition_id = $1)
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Every bonus answer in scope with its question's correct option
    pub async fn bonus_records(&self, competition_id: Option<Uuid>) -> Result<Vec<BonusRecord>> {
        let records = sqlx::query_as::<_, BonusRecord>(
            r#"
            SELECT a.user_id, a.question_choice_id, q.correct_choice_id
            FROM bonus_answers a
            INNER JOIN bonus_questions q ON q.question_id = a.question_id
            WHERE ($1::uuid IS NULL OR q.competition_id = $1)
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
