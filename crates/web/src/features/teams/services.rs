use sqlx::PgPool;
use storage::{
    dto::team::CreateTeamRequest, error::Result, models::Team,
    repository::team::TeamRepository,
};
use uuid::Uuid;

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    TeamRepository::new(pool).list().await
}

pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<Team> {
    TeamRepository::new(pool).find_by_id(id).await
}

pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let team = TeamRepository::new(pool).create(request).await?;
    tracing::info!(team_id = %team.team_id, "Created team {}", team.name);
    Ok(team)
}
