use sqlx::PgPool;
use storage::{
    dto::competition::CreateCompetitionRequest, error::Result, models::Competition,
    repository::competition::CompetitionRepository,
};
use uuid::Uuid;

/// List all competitions
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by ID
pub async fn get_competition(pool: &PgPool, id: Uuid) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new competition
pub async fn create_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.create(request).await?;

    tracing::info!(
        competition_id = %competition.competition_id,
        "Created competition {}",
        competition.name
    );

    Ok(competition)
}
