use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::CreateMatchRequest;
use crate::error::{Result, StorageError};
use crate::models::Match;

const MATCH_COLUMNS: &str = "match_id, team_home_id, team_away_id, match_date, score_home, \
                             score_away, group_label, venue, competition_id";

pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List matches in kick-off order, optionally for one competition
    pub async fn list(&self, competition_id: Option<Uuid>) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            r#"
            SELECT {MATCH_COLUMNS}
            FROM matches
            WHERE ($1::uuid IS NULL OR competition_id = $1)
            ORDER BY match_date, match_id
            "#
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateMatchRequest) -> Result<Match> {
        sqlx::query_as::<_, Match>(&format!(
            r#"
            INSERT INTO matches (
                team_home_id, team_away_id, match_date, group_label, venue, competition_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(req.team_home_id)
        .bind(req.team_away_id)
        .bind(req.match_date)
        .bind(&req.group_label)
        .bind(&req.venue)
        .bind(req.competition_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Match already exists"))
    }

    /// Store the final score, or clear it with `None`
    pub async fn set_result(&self, id: Uuid, result: Option<(i32, i32)>) -> Result<Match> {
        let (score_home, score_away) = result.unzip();

        sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET score_home = $2, score_away = $3
            WHERE match_id = $1
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(score_home)
        .bind(score_away)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }
}
