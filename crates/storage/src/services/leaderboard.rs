use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::{BonusRecord, GuessRecord, LeaderboardEntry};
use crate::error::Result;
use crate::repository::leaderboard::LeaderboardRepository;
use crate::services::scoring::{ScoringRules, score_bonus, score_match};

#[derive(Debug, Default)]
struct Tally {
    match_points: i64,
    exact: i64,
    one_score: i64,
    result_correct: i64,
    scored_guesses: i64,
    bonus_points: i64,
    correct_bonus: i64,
    answered_bonus: i64,
}

/// Score every record and rank users by points, then exact guesses, then win
/// percentage. Guesses on unplayed matches are skipped entirely; users are
/// enumerated by id, and the sort is stable so remaining ties keep that order.
pub fn build_leaderboard(
    guesses: &[GuessRecord],
    answers: &[BonusRecord],
    rules: &ScoringRules,
) -> Vec<LeaderboardEntry> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

    for guess in guesses {
        let Some(result) = guess.result() else {
            continue;
        };

        let outcome = score_match((guess.guess_home, guess.guess_away), result);
        let tally = tallies.entry(guess.user_id.as_str()).or_default();

        tally.match_points += outcome.points();
        tally.exact += i64::from(outcome.is_exact());
        tally.one_score += i64::from(outcome.is_one_score());
        tally.result_correct += i64::from(outcome.is_result_correct());
        tally.scored_guesses += 1;
    }

    for answer in answers {
        let outcome = score_bonus(answer.question_choice_id, answer.correct_choice_id, rules);
        let tally = tallies.entry(answer.user_id.as_str()).or_default();

        tally.bonus_points += outcome.points;
        tally.correct_bonus += i64::from(outcome.is_correct);
        tally.answered_bonus += 1;
    }

    let mut entries: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(user, tally)| summarize(user, tally))
        .collect();

    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.exact.cmp(&a.exact))
            .then_with(|| b.win_percentage.cmp(&a.win_percentage))
    });

    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position as i64 + 1;
    }

    entries
}

/// Load the scoring inputs for one competition (or all of them) and rank them
pub async fn compute_leaderboard(
    pool: &PgPool,
    competition_id: Option<Uuid>,
    rules: &ScoringRules,
) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    let guesses = repo.guess_records(competition_id).await?;
    let answers = repo.bonus_records(competition_id).await?;

    Ok(build_leaderboard(&guesses, &answers, rules))
}

fn summarize(user: &str, tally: Tally) -> LeaderboardEntry {
    let points = tally.match_points + tally.bonus_points;
    let total_guesses = tally.scored_guesses + tally.answered_bonus;

    let (win_percentage, accuracy, avg_points) = if total_guesses == 0 {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    } else {
        let total = Decimal::from(total_guesses);
        (
            (Decimal::from(tally.result_correct * 100) / total).round_dp(1),
            (Decimal::from(tally.exact * 100) / total).round_dp(1),
            (Decimal::from(points) / total).round_dp(2),
        )
    };

    LeaderboardEntry {
        rank: 0,
        user: user.to_string(),
        points,
        match_points: tally.match_points,
        bonus_points: tally.bonus_points,
        exact: tally.exact,
        one_score: tally.one_score,
        result_correct: tally.result_correct,
        correct_bonus: tally.correct_bonus,
        total_guesses,
        win_percentage,
        accuracy,
        avg_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(user: &str, guess: (i32, i32), result: Option<(i32, i32)>) -> GuessRecord {
        GuessRecord {
            user_id: user.to_string(),
            guess_home: guess.0,
            guess_away: guess.1,
            score_home: result.map(|r| r.0),
            score_away: result.map(|r| r.1),
        }
    }

    fn answer(user: &str, chosen: Option<Uuid>, correct: Option<Uuid>) -> BonusRecord {
        BonusRecord {
            user_id: user.to_string(),
            question_choice_id: chosen,
            correct_choice_id: correct,
        }
    }

    fn entry<'a>(board: &'a [LeaderboardEntry], user: &str) -> &'a LeaderboardEntry {
        board.iter().find(|e| e.user == user).unwrap()
    }

    #[test]
    fn test_empty_inputs_give_empty_board() {
        assert!(build_leaderboard(&[], &[], &ScoringRules::default()).is_empty());
    }

    #[test]
    fn test_unplayed_matches_are_excluded() {
        let guesses = vec![
            guess("alice", (1, 0), Some((1, 0))),
            guess("alice", (2, 2), None),
        ];

        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());
        let alice = entry(&board, "alice");

        assert_eq!(alice.total_guesses, 1);
        assert_eq!(alice.points, 5);
        assert_eq!(alice.win_percentage, Decimal::from(100));
    }

    #[test]
    fn test_user_with_only_unplayed_guesses_is_absent() {
        let guesses = vec![guess("bob", (1, 0), None)];
        assert!(build_leaderboard(&guesses, &[], &ScoringRules::default()).is_empty());
    }

    #[test]
    fn test_combines_match_and_bonus_tracks() {
        let right = Uuid::new_v4();
        let guesses = vec![
            guess("alice", (3, 3), Some((3, 3))),
            guess("alice", (2, 1), Some((3, 1))),
            guess("alice", (2, 2), Some((3, 2))),
        ];
        let answers = vec![answer("alice", Some(right), Some(right))];

        let board = build_leaderboard(&guesses, &answers, &ScoringRules::default());
        let alice = entry(&board, "alice");

        assert_eq!(alice.match_points, 8);
        assert_eq!(alice.bonus_points, 5);
        assert_eq!(alice.points, 13);
        assert_eq!(alice.exact, 1);
        assert_eq!(alice.one_score, 1);
        assert_eq!(alice.result_correct, 2);
        assert_eq!(alice.correct_bonus, 1);
        assert_eq!(alice.total_guesses, 4);
        assert_eq!(alice.win_percentage, Decimal::new(500, 1));
        assert_eq!(alice.accuracy, Decimal::new(250, 1));
        assert_eq!(alice.avg_points, Decimal::new(325, 2));
    }

    #[test]
    fn test_bonus_only_user_is_ranked() {
        let right = Uuid::new_v4();
        let answers = vec![answer("carol", Some(right), Some(right))];

        let board = build_leaderboard(&[], &answers, &ScoringRules::default());

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user, "carol");
        assert_eq!(board[0].points, 5);
        assert_eq!(board[0].match_points, 0);
        assert_eq!(board[0].total_guesses, 1);
        assert_eq!(board[0].win_percentage, Decimal::ZERO);
        assert_eq!(board[0].accuracy, Decimal::ZERO);
        assert_eq!(board[0].avg_points, Decimal::new(500, 2));
    }

    #[test]
    fn test_ungraded_bonus_counts_as_answered() {
        let answers = vec![answer("dave", Some(Uuid::new_v4()), None)];

        let board = build_leaderboard(&[], &answers, &ScoringRules::default());

        assert_eq!(board[0].points, 0);
        assert_eq!(board[0].total_guesses, 1);
        assert_eq!(board[0].avg_points, Decimal::ZERO);
    }

    #[test]
    fn test_rounding_of_derived_stats() {
        let guesses = vec![
            guess("erin", (1, 0), Some((3, 1))),
            guess("erin", (1, 0), Some((0, 1))),
            guess("erin", (1, 0), Some((0, 2))),
        ];

        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());

        assert_eq!(board[0].win_percentage, Decimal::new(333, 1));
        assert_eq!(board[0].avg_points, Decimal::new(33, 2));
    }

    #[test]
    fn test_accuracy_counts_exact_hits_only() {
        let guesses = vec![
            guess("flo", (2, 1), Some((2, 1))),
            guess("flo", (2, 1), Some((3, 1))),
            guess("flo", (1, 1), Some((0, 0))),
        ];

        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());

        assert_eq!(board[0].exact, 1);
        assert_eq!(board[0].win_percentage, Decimal::from(100));
        assert_eq!(board[0].accuracy, Decimal::new(333, 1));
    }

    #[test]
    fn test_ranking_by_points_then_exact_then_win_percentage() {
        let guesses = vec![
            // frank: one exact (5) + one wrong
            guess("frank", (1, 0), Some((1, 0))),
            guess("frank", (0, 1), Some((1, 0))),
            // gina: one-score (3) + two result-only (1 + 1), no exact
            guess("gina", (2, 0), Some((3, 0))),
            guess("gina", (1, 0), Some((3, 1))),
            guess("gina", (0, 1), Some((1, 2))),
            // hank: five points from an exact on a single guess
            guess("hank", (2, 2), Some((2, 2))),
            // ivan: tops the table outright
            guess("ivan", (1, 1), Some((1, 1))),
            guess("ivan", (0, 3), Some((0, 3))),
        ];

        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());
        let order: Vec<&str> = board.iter().map(|e| e.user.as_str()).collect();

        // frank and hank tie on points and exact; hank wins on 100% vs 50%.
        // gina has the same points but no exact.
        assert_eq!(order, vec!["ivan", "hank", "frank", "gina"]);
        assert_eq!(
            board.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_full_ties_keep_enumeration_order() {
        let guesses = vec![
            guess("zed", (1, 0), Some((2, 0))),
            guess("amy", (1, 0), Some((2, 0))),
        ];

        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());
        let order: Vec<&str> = board.iter().map(|e| e.user.as_str()).collect();

        assert_eq!(order, vec!["amy", "zed"]);
    }

    #[test]
    fn test_serializes_stats_as_numbers() {
        let guesses = vec![guess("amy", (1, 0), Some((2, 0)))];
        let board = build_leaderboard(&guesses, &[], &ScoringRules::default());

        let json = serde_json::to_value(&board[0]).unwrap();
        assert_eq!(json["win_percentage"], serde_json::json!(100.0));
        assert_eq!(json["accuracy"], serde_json::json!(0.0));
        assert_eq!(json["avg_points"], serde_json::json!(3.0));
    }
}
