use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Guess;

const GUESS_COLUMNS: &str =
    "guess_id, user_id, match_id, guess_home, guess_away, created_at, updated_at";

pub struct GuessRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GuessRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// A user's guesses, optionally restricted to one competition's matches
    pub async fn list_for_user(
        &self,
        user_id: &str,
        competition_id: Option<Uuid>,
    ) -> Result<Vec<Guess>> {
        let guesses = sqlx::query_as::<_, Guess>(
            r#"
            SELECT g.guess_id, g.user_id, g.match_id, g.guess_home, g.guess_away,
                   g.created_at, g.updated_at
            FROM guesses g
            INNER JOIN matches m ON m.match_id = g.match_id
            WHERE g.user_id = $1
              AND ($2::uuid IS NULL OR m.competition_id = $2)
            ORDER BY m.match_date, g.guess_id
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(guesses)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Guess> {
        sqlx::query_as::<_, Guess>(&format!(
            "SELECT {GUESS_COLUMNS} FROM guesses WHERE guess_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Insert a guess; a second guess for the same (user, match) is a `Duplicate`
    pub async fn create(
        &self,
        user_id: &str,
        match_id: Uuid,
        guess_home: i32,
        guess_away: i32,
    ) -> Result<Guess> {
        sqlx::query_as::<_, Guess>(&format!(
            r#"
            INSERT INTO guesses (user_id, match_id, guess_home, guess_away)
            VALUES ($1, $2, $3, $4)
            RETURNING {GUESS_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(match_id)
        .bind(guess_home)
        .bind(guess_away)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from_write(e, "A guess for this match already exists; update it instead")
        })
    }

    pub async fn update(&self, id: Uuid, guess_home: i32, guess_away: i32) -> Result<Guess> {
        sqlx::query_as::<_, Guess>(&format!(
            r#"
            UPDATE guesses
            SET guess_home = $2, guess_away = $3, updated_at = NOW()
            WHERE guess_id = $1
            RETURNING {GUESS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(guess_home)
        .bind(guess_away)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM guesses WHERE guess_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
