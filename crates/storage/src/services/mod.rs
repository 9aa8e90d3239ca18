pub mod gate;
pub mod leaderboard;
pub mod lock;
pub mod scoring;
pub mod submissions;
