use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::matches::{CreateMatchRequest, MatchResponse},
    error::{Result, StorageError},
    models::{Match, Requester, Team},
    repository::{matches::MatchRepository, team::TeamRepository},
    services::submissions,
};
use uuid::Uuid;

fn embed_teams(game: Match, teams: &HashMap<Uuid, Team>) -> Result<MatchResponse> {
    let home = teams
        .get(&game.team_home_id)
        .cloned()
        .ok_or(StorageError::NotFound)?;
    let away = teams
        .get(&game.team_away_id)
        .cloned()
        .ok_or(StorageError::NotFound)?;

    Ok(MatchResponse::new(game, home, away, Utc::now()))
}

/// List matches with their teams, optionally for one competition
pub async fn list_matches(pool: &PgPool, competition_id: Option<Uuid>) -> Result<Vec<MatchResponse>> {
    let matches = MatchRepository::new(pool).list(competition_id).await?;
    let mut team_ids: Vec<Uuid> = matches
        .iter()
        .flat_map(|game| [game.team_home_id, game.team_away_id])
        .collect();
    team_ids.sort_unstable();
    team_ids.dedup();
    let teams = TeamRepository::new(pool).map_by_ids(&team_ids).await?;

    matches
        .into_iter()
        .map(|game| embed_teams(game, &teams))
        .collect()
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<MatchResponse> {
    let game = MatchRepository::new(pool).find_by_id(id).await?;
    let teams = TeamRepository::new(pool)
        .map_by_ids(&[game.team_home_id, game.team_away_id])
        .await?;

    embed_teams(game, &teams)
}

pub async fn create_match(pool: &PgPool, request: &CreateMatchRequest) -> Result<MatchResponse> {
    let game = MatchRepository::new(pool).create(request).await?;
    tracing::info!(match_id = %game.match_id, "Scheduled match at {}", game.match_date);

    get_match(pool, game.match_id).await
}

/// Record or clear the final score. Leaderboards pick the change up on their
/// next read since points are never stored.
pub async fn record_result(
    pool: &PgPool,
    requester: &Requester,
    id: Uuid,
    result: Option<(i32, i32)>,
) -> Result<MatchResponse> {
    let game = submissions::record_match_result(pool, requester, id, result, Utc::now()).await?;

    match result {
        Some((home, away)) => {
            tracing::info!(match_id = %game.match_id, "Recorded result {}-{}", home, away)
        }
        None => tracing::info!(match_id = %game.match_id, "Cleared result"),
    }

    get_match(pool, game.match_id).await
}
