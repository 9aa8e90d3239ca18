pub mod bonus;
pub mod common;
pub mod competition;
pub mod guess;
pub mod leaderboard;
pub mod matches;
pub mod team;
