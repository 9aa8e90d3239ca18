use uuid::Uuid;

/// Points for predicting both scores exactly
pub const EXACT_POINTS: i64 = 5;
/// Points for the right outcome plus exactly one exact score
pub const ONE_SCORE_POINTS: i64 = 3;
/// Points for the right outcome only
pub const RESULT_ONLY_POINTS: i64 = 1;
/// Bonus value used when nothing else is configured
pub const DEFAULT_BONUS_POINTS: i64 = 5;

/// Deployment-level scoring knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    /// Awarded for each correctly answered bonus question
    pub bonus_points: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            bonus_points: DEFAULT_BONUS_POINTS,
        }
    }
}

/// How a guess compares to the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Exact,
    OneScore,
    ResultOnly,
    Wrong,
}

impl MatchOutcome {
    pub fn points(self) -> i64 {
        match self {
            Self::Exact => EXACT_POINTS,
            Self::OneScore => ONE_SCORE_POINTS,
            Self::ResultOnly => RESULT_ONLY_POINTS,
            Self::Wrong => 0,
        }
    }

    pub fn is_exact(self) -> bool {
        self == Self::Exact
    }

    pub fn is_one_score(self) -> bool {
        self == Self::OneScore
    }

    /// Every outcome except `Wrong` called the winner (or the draw) correctly
    pub fn is_result_correct(self) -> bool {
        self != Self::Wrong
    }
}

/// Grade a `(home, away)` guess against a played match.
///
/// The first matching rule wins: both scores exact, then correct outcome with
/// one exact score, then correct outcome alone. A draw guess is only a correct
/// outcome for an actual draw.
pub fn score_match(guess: (i32, i32), result: (i32, i32)) -> MatchOutcome {
    let (guess_home, guess_away) = guess;
    let (score_home, score_away) = result;

    let guess_diff = guess_home - guess_away;
    let real_diff = score_home - score_away;

    let result_correct = guess_diff.cmp(&0) == real_diff.cmp(&0);
    let home_correct = guess_home == score_home;
    let away_correct = guess_away == score_away;

    if home_correct && away_correct {
        MatchOutcome::Exact
    } else if result_correct && (home_correct ^ away_correct) {
        MatchOutcome::OneScore
    } else if result_correct {
        MatchOutcome::ResultOnly
    } else {
        MatchOutcome::Wrong
    }
}

/// Outcome of one bonus answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusOutcome {
    pub points: i64,
    pub is_correct: bool,
}

/// Grade a bonus answer. An ungraded question (no correct choice yet) and a
/// cleared answer both score zero.
pub fn score_bonus(
    answer: Option<Uuid>,
    correct: Option<Uuid>,
    rules: &ScoringRules,
) -> BonusOutcome {
    let is_correct = matches!((answer, correct), (Some(a), Some(c)) if a == c);

    BonusOutcome {
        points: if is_correct { rules.bonus_points } else { 0 },
        is_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_guess_scores_five() {
        let outcome = score_match((3, 3), (3, 3));
        assert_eq!(outcome, MatchOutcome::Exact);
        assert_eq!(outcome.points(), 5);
        assert!(outcome.is_exact());
        assert!(outcome.is_result_correct());
    }

    #[test]
    fn test_exact_win_is_exact() {
        assert_eq!(score_match((2, 1), (2, 1)), MatchOutcome::Exact);
    }

    #[test]
    fn test_one_score_with_correct_result() {
        let outcome = score_match((2, 1), (3, 1));
        assert_eq!(outcome, MatchOutcome::OneScore);
        assert_eq!(outcome.points(), 3);
        assert!(outcome.is_one_score());
        assert!(outcome.is_result_correct());
    }

    #[test]
    fn test_draw_guess_matches_other_draw() {
        let outcome = score_match((0, 0), (1, 1));
        assert_eq!(outcome, MatchOutcome::ResultOnly);
        assert_eq!(outcome.points(), 1);
    }

    #[test]
    fn test_result_only_for_away_win() {
        assert_eq!(score_match((0, 2), (1, 4)), MatchOutcome::ResultOnly);
    }

    #[test]
    fn test_wrong_sign_ignores_matching_number() {
        let outcome = score_match((2, 2), (3, 2));
        assert_eq!(outcome, MatchOutcome::Wrong);
        assert_eq!(outcome.points(), 0);
        assert!(!outcome.is_result_correct());
    }

    #[test]
    fn test_draw_guess_against_home_win_is_wrong() {
        assert_eq!(score_match((1, 1), (2, 1)), MatchOutcome::Wrong);
    }

    #[test]
    fn test_reversed_winner_is_wrong() {
        assert_eq!(score_match((1, 0), (0, 1)), MatchOutcome::Wrong);
    }

    #[test]
    fn test_bonus_correct_choice() {
        let choice = Uuid::new_v4();
        let outcome = score_bonus(Some(choice), Some(choice), &ScoringRules::default());
        assert_eq!(
            outcome,
            BonusOutcome {
                points: DEFAULT_BONUS_POINTS,
                is_correct: true
            }
        );
    }

    #[test]
    fn test_bonus_uses_configured_points() {
        let choice = Uuid::new_v4();
        let rules = ScoringRules { bonus_points: 6 };
        assert_eq!(score_bonus(Some(choice), Some(choice), &rules).points, 6);
    }

    #[test]
    fn test_bonus_wrong_choice() {
        let outcome = score_bonus(
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            &ScoringRules::default(),
        );
        assert_eq!(outcome.points, 0);
        assert!(!outcome.is_correct);
    }

    #[test]
    fn test_bonus_ungraded_question_scores_zero() {
        let outcome = score_bonus(Some(Uuid::new_v4()), None, &ScoringRules::default());
        assert_eq!(outcome.points, 0);
        assert!(!outcome.is_correct);
    }

    #[test]
    fn test_bonus_cleared_answer_scores_zero() {
        assert_eq!(
            score_bonus(None, None, &ScoringRules::default()).points,
            0
        );
    }
}
