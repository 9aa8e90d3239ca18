pub mod account;
pub mod bonus;
pub mod bonus_answers;
pub mod competitions;
pub mod guesses;
pub mod leaderboard;
pub mod matches;
pub mod teams;
