use axum::{
    Json,
    extract::{Query, State},
};
use storage::{
    Database,
    dto::{common::CompetitionFilter, leaderboard::LeaderboardEntry},
    services::scoring::ScoringRules,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scores",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "Ranked scoreboard, all competitions combined unless filtered", body = Vec<LeaderboardEntry>)
    ),
    tag = "scores"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    State(rules): State<ScoringRules>,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Json<Vec<LeaderboardEntry>>, WebError> {
    let entries = services::get_leaderboard(db.pool(), filter.competition, &rules).await?;

    Ok(Json(entries))
}
