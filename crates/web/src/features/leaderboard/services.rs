use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardEntry,
    error::Result,
    services::{leaderboard, scoring::ScoringRules},
};
use uuid::Uuid;

/// Rank every user with at least one scoring record in scope
pub async fn get_leaderboard(
    pool: &PgPool,
    competition_id: Option<Uuid>,
    rules: &ScoringRules,
) -> Result<Vec<LeaderboardEntry>> {
    let entries = leaderboard::compute_leaderboard(pool, competition_id, rules).await?;

    tracing::debug!(
        competition = ?competition_id,
        users = entries.len(),
        "Computed leaderboard"
    );

    Ok(entries)
}
