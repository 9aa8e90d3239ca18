use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::CreateTeamRequest;
use crate::error::{Result, StorageError};
use crate::models::Team;

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all teams by name
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, country_code FROM teams ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// The given teams keyed by id, for embedding into matches
    pub async fn map_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, country_code FROM teams WHERE team_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(teams.into_iter().map(|team| (team.team_id, team)).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        sqlx::query_as::<_, Team>(
            "SELECT team_id, name, country_code FROM teams WHERE team_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, country_code)
            VALUES ($1, UPPER($2))
            RETURNING team_id, name, country_code
            "#,
        )
        .bind(&req.name)
        .bind(&req.country_code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Team name already exists"))
    }
}
