use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::guess::{CreateGuessRequest, UpdateGuessRequest};
use crate::error::{Result, StorageError};
use crate::models::{BonusAnswer, BonusQuestion, Guess, Match, QuestionChoice, Requester};
use crate::repository::bonus::{BonusAnswerRepository, BonusRepository};
use crate::repository::competition::CompetitionRepository;
use crate::repository::guess::GuessRepository;
use crate::repository::matches::MatchRepository;
use crate::services::gate::{self, WriteContext};
use crate::services::lock::Lockable;

fn user_id(requester: &Requester) -> Result<&str> {
    requester
        .user_id
        .as_deref()
        .ok_or_else(|| StorageError::PermissionDenied("a user identity is required".to_string()))
}

/// Reads are owner-only; someone else's record looks exactly like a missing one
fn ensure_visible(requester: &Requester, owner: &str) -> Result<()> {
    if requester.is_owner_of(owner) {
        Ok(())
    } else {
        Err(StorageError::NotFound)
    }
}

/// The option must belong to the question it is used for
fn ensure_offered(option: &QuestionChoice, question: &BonusQuestion) -> Result<()> {
    if option.question_id == question.question_id {
        Ok(())
    } else {
        Err(StorageError::Validation(
            "choice is not offered by this question".to_string(),
        ))
    }
}

/// Resolve an option id for `question`; unknown ids are as invalid as foreign ones
async fn find_offered(
    bonus: &BonusRepository<'_>,
    question_choice_id: Uuid,
    question: &BonusQuestion,
) -> Result<QuestionChoice> {
    let option = bonus
        .find_question_choice(question_choice_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                StorageError::Validation("choice is not offered by this question".to_string())
            }
            other => other,
        })?;
    ensure_offered(&option, question)?;
    Ok(option)
}

async fn question_lock(pool: &PgPool, question: &BonusQuestion) -> Result<DateTime<Utc>> {
    let competition = CompetitionRepository::new(pool)
        .find_by_id(question.competition_id)
        .await?;
    Ok(competition.lock_at())
}

/// Create a guess for the requester on an open match
pub async fn submit_guess(
    pool: &PgPool,
    requester: &Requester,
    req: &CreateGuessRequest,
    now: DateTime<Utc>,
) -> Result<Guess> {
    let game = MatchRepository::new(pool).find_by_id(req.match_id).await?;

    gate::authorize(
        gate::CREATE,
        &WriteContext {
            requester,
            owner: None,
            lock_at: game.lock_at(),
            now,
        },
    )?;

    GuessRepository::new(pool)
        .create(user_id(requester)?, game.match_id, req.guess_home, req.guess_away)
        .await
}

/// Fetch one of the requester's guesses
pub async fn get_guess(pool: &PgPool, requester: &Requester, guess_id: Uuid) -> Result<Guess> {
    let guess = GuessRepository::new(pool).find_by_id(guess_id).await?;
    ensure_visible(requester, &guess.user_id)?;
    Ok(guess)
}

pub async fn list_guesses(
    pool: &PgPool,
    requester: &Requester,
    competition_id: Option<Uuid>,
) -> Result<Vec<Guess>> {
    GuessRepository::new(pool)
        .list_for_user(user_id(requester)?, competition_id)
        .await
}

async fn authorize_guess_change(
    pool: &PgPool,
    requester: &Requester,
    guess: &Guess,
    now: DateTime<Utc>,
) -> Result<()> {
    let game = MatchRepository::new(pool).find_by_id(guess.match_id).await?;

    gate::authorize(
        gate::MODIFY,
        &WriteContext {
            requester,
            owner: Some(guess.user_id.as_str()),
            lock_at: game.lock_at(),
            now,
        },
    )
}

pub async fn update_guess(
    pool: &PgPool,
    requester: &Requester,
    guess_id: Uuid,
    req: &UpdateGuessRequest,
    now: DateTime<Utc>,
) -> Result<Guess> {
    let repo = GuessRepository::new(pool);
    let guess = repo.find_by_id(guess_id).await?;

    authorize_guess_change(pool, requester, &guess, now).await?;

    repo.update(guess.guess_id, req.guess_home, req.guess_away)
        .await
}

pub async fn delete_guess(
    pool: &PgPool,
    requester: &Requester,
    guess_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let repo = GuessRepository::new(pool);
    let guess = repo.find_by_id(guess_id).await?;

    authorize_guess_change(pool, requester, &guess, now).await?;

    repo.delete(guess.guess_id).await
}

/// Answer a bonus question, replacing the requester's previous answer if any.
/// Returns the answer and whether it was newly created.
pub async fn submit_bonus_answer(
    pool: &PgPool,
    requester: &Requester,
    question_id: Uuid,
    question_choice_id: Uuid,
    now: DateTime<Utc>,
) -> Result<(BonusAnswer, bool)> {
    let bonus = BonusRepository::new(pool);
    let question = bonus.find_question(question_id).await?;

    gate::authorize(
        gate::CREATE,
        &WriteContext {
            requester,
            owner: None,
            lock_at: question_lock(pool, &question).await?,
            now,
        },
    )?;

    let option = find_offered(&bonus, question_choice_id, &question).await?;

    BonusAnswerRepository::new(pool)
        .upsert(user_id(requester)?, question.question_id, option.question_choice_id)
        .await
}

pub async fn get_bonus_answer(
    pool: &PgPool,
    requester: &Requester,
    answer_id: Uuid,
) -> Result<BonusAnswer> {
    let answer = BonusAnswerRepository::new(pool).find_by_id(answer_id).await?;
    ensure_visible(requester, &answer.user_id)?;
    Ok(answer)
}

pub async fn list_bonus_answers(
    pool: &PgPool,
    requester: &Requester,
    competition_id: Option<Uuid>,
) -> Result<Vec<BonusAnswer>> {
    BonusAnswerRepository::new(pool)
        .list_for_user(user_id(requester)?, competition_id)
        .await
}

async fn authorize_answer_change(
    pool: &PgPool,
    requester: &Requester,
    answer: &BonusAnswer,
    now: DateTime<Utc>,
) -> Result<BonusQuestion> {
    let question = BonusRepository::new(pool)
        .find_question(answer.question_id)
        .await?;

    gate::authorize(
        gate::MODIFY,
        &WriteContext {
            requester,
            owner: Some(answer.user_id.as_str()),
            lock_at: question_lock(pool, &question).await?,
            now,
        },
    )?;

    Ok(question)
}

/// Change or clear the selected option of an existing answer
pub async fn update_bonus_answer(
    pool: &PgPool,
    requester: &Requester,
    answer_id: Uuid,
    question_choice_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> Result<BonusAnswer> {
    let answers = BonusAnswerRepository::new(pool);
    let answer = answers.find_by_id(answer_id).await?;

    let question = authorize_answer_change(pool, requester, &answer, now).await?;

    if let Some(id) = question_choice_id {
        find_offered(&BonusRepository::new(pool), id, &question).await?;
    }

    answers.update_choice(answer.answer_id, question_choice_id).await
}

pub async fn delete_bonus_answer(
    pool: &PgPool,
    requester: &Requester,
    answer_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let answers = BonusAnswerRepository::new(pool);
    let answer = answers.find_by_id(answer_id).await?;

    authorize_answer_change(pool, requester, &answer, now).await?;

    answers.delete(answer.answer_id).await
}

/// Grade a bonus question. Administrators may do this at any time, lock or not.
pub async fn set_correct_choice(
    pool: &PgPool,
    requester: &Requester,
    question_id: Uuid,
    question_choice_id: Option<Uuid>,
    now: DateTime<Utc>,
) -> Result<BonusQuestion> {
    let bonus = BonusRepository::new(pool);
    let question = bonus.find_question(question_id).await?;

    gate::authorize(
        gate::ADMINISTER,
        &WriteContext {
            requester,
            owner: None,
            lock_at: question_lock(pool, &question).await?,
            now,
        },
    )?;

    if let Some(id) = question_choice_id {
        find_offered(&bonus, id, &question).await?;
    }

    bonus
        .set_correct_choice(question.question_id, question_choice_id)
        .await
}

/// Record or clear a match's final score; administrator only, never locked
pub async fn record_match_result(
    pool: &PgPool,
    requester: &Requester,
    match_id: Uuid,
    result: Option<(i32, i32)>,
    now: DateTime<Utc>,
) -> Result<Match> {
    let repo = MatchRepository::new(pool);
    let game = repo.find_by_id(match_id).await?;

    gate::authorize(
        gate::ADMINISTER,
        &WriteContext {
            requester,
            owner: None,
            lock_at: game.lock_at(),
            now,
        },
    )?;

    repo.set_result(game.match_id, result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::dto::bonus::CreateQuestionRequest;
    use crate::dto::competition::CreateCompetitionRequest;
    use crate::dto::matches::CreateMatchRequest;
    use crate::dto::team::CreateTeamRequest;
    use crate::models::Competition;
    use crate::repository::team::TeamRepository;

    fn question(question_id: Uuid) -> BonusQuestion {
        BonusQuestion {
            question_id,
            question: "Who wins the tournament?".to_string(),
            competition_id: Uuid::new_v4(),
            correct_choice_id: None,
        }
    }

    fn option(question_id: Uuid) -> QuestionChoice {
        QuestionChoice {
            question_choice_id: Uuid::new_v4(),
            question_id,
            choice_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_option_of_same_question_is_accepted() {
        let id = Uuid::new_v4();
        assert!(ensure_offered(&option(id), &question(id)).is_ok());
    }

    #[test]
    fn test_option_of_other_question_is_invalid() {
        let result = ensure_offered(&option(Uuid::new_v4()), &question(Uuid::new_v4()));
        assert!(matches!(result, Err(StorageError::Validation(_))));
    }

    #[test]
    fn test_foreign_records_are_invisible() {
        let bob = Requester::user("bob");
        assert!(matches!(
            ensure_visible(&bob, "alice"),
            Err(StorageError::NotFound)
        ));
        assert!(ensure_visible(&bob, "bob").is_ok());
    }

    #[test]
    fn test_admin_without_user_has_no_submissions() {
        assert!(matches!(
            user_id(&Requester::admin()),
            Err(StorageError::PermissionDenied(_))
        ));
    }

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 11, 19, 0, 0).unwrap()
    }

    async fn seed_match(pool: &PgPool) -> (Competition, Match) {
        let competition = CompetitionRepository::new(pool)
            .create(&CreateCompetitionRequest {
                name: "World Cup 2026".to_string(),
                short_name: "WC26".to_string(),
                start_date: kickoff(),
            })
            .await
            .unwrap();

        let teams = TeamRepository::new(pool);
        let home = teams
            .create(&CreateTeamRequest {
                name: "Spain".to_string(),
                country_code: Some("ES".to_string()),
            })
            .await
            .unwrap();
        let away = teams
            .create(&CreateTeamRequest {
                name: "Denmark".to_string(),
                country_code: Some("DK".to_string()),
            })
            .await
            .unwrap();

        let game = MatchRepository::new(pool)
            .create(&CreateMatchRequest {
                team_home_id: home.team_id,
                team_away_id: away.team_id,
                match_date: kickoff(),
                group_label: "A".to_string(),
                venue: None,
                competition_id: competition.competition_id,
            })
            .await
            .unwrap();

        (competition, game)
    }

    async fn seed_question(
        pool: &PgPool,
        competition: &Competition,
        label: &str,
    ) -> (BonusQuestion, QuestionChoice) {
        let bonus = BonusRepository::new(pool);
        let question = bonus
            .create_question(&CreateQuestionRequest {
                question: format!("Who wins {label}?"),
                competition_id: competition.competition_id,
            })
            .await
            .unwrap();
        let choice = bonus.create_choice(label).await.unwrap();
        let option = bonus
            .add_question_choice(question.question_id, choice.choice_id)
            .await
            .unwrap();

        (question, option)
    }

    async fn count(pool: &PgPool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn guess_request(game: &Match, home: i32, away: i32) -> CreateGuessRequest {
        CreateGuessRequest {
            match_id: game.match_id,
            guess_home: home,
            guess_away: away,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_guess_at_kickoff_is_locked_and_not_stored(pool: PgPool) {
        let (_, game) = seed_match(&pool).await;
        let alice = Requester::user("alice");

        let result = submit_guess(&pool, &alice, &guess_request(&game, 2, 1), kickoff()).await;

        assert!(matches!(result, Err(StorageError::Locked { lock_at }) if lock_at == kickoff()));
        assert_eq!(count(&pool, "guesses").await, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_second_guess_for_match_is_duplicate(pool: PgPool) {
        let (_, game) = seed_match(&pool).await;
        let alice = Requester::user("alice");
        let before = kickoff() - Duration::hours(2);

        let first = submit_guess(&pool, &alice, &guess_request(&game, 2, 1), before)
            .await
            .unwrap();
        let second = submit_guess(&pool, &alice, &guess_request(&game, 0, 0), before).await;

        assert!(matches!(second, Err(StorageError::Duplicate(_))));
        assert_eq!(count(&pool, "guesses").await, 1);

        let stored = get_guess(&pool, &alice, first.guess_id).await.unwrap();
        assert_eq!((stored.guess_home, stored.guess_away), (2, 1));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_after_kickoff_leaves_guess_unchanged(pool: PgPool) {
        let (_, game) = seed_match(&pool).await;
        let alice = Requester::user("alice");

        let guess = submit_guess(
            &pool,
            &alice,
            &guess_request(&game, 1, 1),
            kickoff() - Duration::minutes(10),
        )
        .await
        .unwrap();

        let change = UpdateGuessRequest {
            guess_home: 3,
            guess_away: 0,
        };
        let result = update_guess(
            &pool,
            &alice,
            guess.guess_id,
            &change,
            kickoff() + Duration::minutes(1),
        )
        .await;

        assert!(matches!(result, Err(StorageError::Locked { .. })));
        let stored = get_guess(&pool, &alice, guess.guess_id).await.unwrap();
        assert_eq!((stored.guess_home, stored.guess_away), (1, 1));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_bonus_answer_after_start_is_locked(pool: PgPool) {
        let (competition, _) = seed_match(&pool).await;
        let (question, option) = seed_question(&pool, &competition, "Spain").await;
        let alice = Requester::user("alice");

        let result = submit_bonus_answer(
            &pool,
            &alice,
            question.question_id,
            option.question_choice_id,
            kickoff() + Duration::hours(1),
        )
        .await;

        assert!(matches!(result, Err(StorageError::Locked { lock_at }) if lock_at == kickoff()));
        assert_eq!(count(&pool, "bonus_answers").await, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_grading_with_option_of_other_question_is_invalid(pool: PgPool) {
        let (competition, _) = seed_match(&pool).await;
        let (question, _) = seed_question(&pool, &competition, "Spain").await;
        let (_, foreign) = seed_question(&pool, &competition, "Denmark").await;

        let result = set_correct_choice(
            &pool,
            &Requester::admin(),
            question.question_id,
            Some(foreign.question_choice_id),
            kickoff(),
        )
        .await;

        assert!(matches!(result, Err(StorageError::Validation(_))));
        let stored = BonusRepository::new(&pool)
            .find_question(question.question_id)
            .await
            .unwrap();
        assert_eq!(stored.correct_choice_id, None);
    }
}
