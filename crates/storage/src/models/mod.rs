mod bonus;
mod competition;
mod guess;
mod matches;
mod requester;
mod team;

pub use bonus::{BonusAnswer, BonusQuestion, Choice, QuestionChoice};
pub use competition::Competition;
pub use guess::Guess;
pub use matches::Match;
pub use requester::Requester;
pub use team::Team;
