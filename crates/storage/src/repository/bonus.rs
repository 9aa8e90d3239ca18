use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::bonus::{CreateQuestionRequest, QuestionChoiceResponse};
use crate::error::{Result, StorageError};
use crate::models::{BonusAnswer, BonusQuestion, Choice, QuestionChoice};

const ANSWER_COLUMNS: &str =
    "answer_id, user_id, question_id, question_choice_id, created_at, updated_at";

/// Questions, the choice pool and the per-question options
pub struct BonusRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BonusRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_questions(&self, competition_id: Option<Uuid>) -> Result<Vec<BonusQuestion>> {
        let questions = sqlx::query_as::<_, BonusQuestion>(
            r#"
            SELECT question_id, question, competition_id, correct_choice_id
            FROM bonus_questions
            WHERE ($1::uuid IS NULL OR competition_id = $1)
            ORDER BY question
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn find_question(&self, id: Uuid) -> Result<BonusQuestion> {
        sqlx::query_as::<_, BonusQuestion>(
            r#"
            SELECT question_id, question, competition_id, correct_choice_id
            FROM bonus_questions
            WHERE question_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create_question(&self, req: &CreateQuestionRequest) -> Result<BonusQuestion> {
        sqlx::query_as::<_, BonusQuestion>(
            r#"
            INSERT INTO bonus_questions (question, competition_id)
            VALUES ($1, $2)
            RETURNING question_id, question, competition_id, correct_choice_id
            "#,
        )
        .bind(&req.question)
        .bind(req.competition_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Question already exists"))
    }

    /// Point the question at its correct option, or clear the grade with `None`
    pub async fn set_correct_choice(
        &self,
        question_id: Uuid,
        question_choice_id: Option<Uuid>,
    ) -> Result<BonusQuestion> {
        sqlx::query_as::<_, BonusQuestion>(
            r#"
            UPDATE bonus_questions
            SET correct_choice_id = $2
            WHERE question_id = $1
            RETURNING question_id, question, competition_id, correct_choice_id
            "#,
        )
        .bind(question_id)
        .bind(question_choice_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create_choice(&self, label: &str) -> Result<Choice> {
        let choice = sqlx::query_as::<_, Choice>(
            "INSERT INTO bonus_choices (label) VALUES ($1) RETURNING choice_id, label",
        )
        .bind(label)
        .fetch_one(self.pool)
        .await?;

        Ok(choice)
    }

    pub async fn list_choices(&self) -> Result<Vec<Choice>> {
        let choices = sqlx::query_as::<_, Choice>(
            "SELECT choice_id, label FROM bonus_choices ORDER BY label",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(choices)
    }

    /// Offer a pool choice on a question; offering it twice is a `Duplicate`
    pub async fn add_question_choice(
        &self,
        question_id: Uuid,
        choice_id: Uuid,
    ) -> Result<QuestionChoice> {
        sqlx::query_as::<_, QuestionChoice>(
            r#"
            INSERT INTO bonus_question_choices (question_id, choice_id)
            VALUES ($1, $2)
            RETURNING question_choice_id, question_id, choice_id
            "#,
        )
        .bind(question_id)
        .bind(choice_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Choice is already offered on this question"))
    }

    pub async fn find_question_choice(&self, id: Uuid) -> Result<QuestionChoice> {
        sqlx::query_as::<_, QuestionChoice>(
            r#"
            SELECT question_choice_id, question_id, choice_id
            FROM bonus_question_choices
            WHERE question_choice_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Options of the given questions, labels included
    pub async fn list_question_choices(
        &self,
        question_ids: &[Uuid],
    ) -> Result<Vec<QuestionChoiceResponse>> {
        let choices = sqlx::query_as::<_, QuestionChoiceResponse>(
            r#"
            SELECT qc.question_choice_id, qc.question_id, qc.choice_id, c.label
            FROM bonus_question_choices qc
            INNER JOIN bonus_choices c ON c.choice_id = qc.choice_id
            WHERE qc.question_id = ANY($1)
            ORDER BY c.label, qc.question_choice_id
            "#,
        )
        .bind(question_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(choices)
    }
}

#[derive(FromRow)]
struct UpsertedAnswer {
    #[sqlx(flatten)]
    answer: BonusAnswer,
    inserted: bool,
}

/// Users' answers to bonus questions
pub struct BonusAnswerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BonusAnswerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
        competition_id: Option<Uuid>,
    ) -> Result<Vec<BonusAnswer>> {
        let answers = sqlx::query_as::<_, BonusAnswer>(
            r#"
            SELECT a.answer_id, a.user_id, a.question_id, a.question_choice_id,
                   a.created_at, a.updated_at
            FROM bonus_answers a
            INNER JOIN bonus_questions q ON q.question_id = a.question_id
            WHERE a.user_id = $1
              AND ($2::uuid IS NULL OR q.competition_id = $2)
            ORDER BY a.created_at, a.answer_id
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(answers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<BonusAnswer> {
        sqlx::query_as::<_, BonusAnswer>(&format!(
            "SELECT {ANSWER_COLUMNS} FROM bonus_answers WHERE answer_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create the user's answer or replace its selection in one statement.
    /// Returns the row and whether it was newly inserted.
    pub async fn upsert(
        &self,
        user_id: &str,
        question_id: Uuid,
        question_choice_id: Uuid,
    ) -> Result<(BonusAnswer, bool)> {
        let row = sqlx::query_as::<_, UpsertedAnswer>(&format!(
            r#"
            INSERT INTO bonus_answers (user_id, question_id, question_choice_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, question_id)
            DO UPDATE SET question_choice_id = EXCLUDED.question_choice_id, updated_at = NOW()
            RETURNING {ANSWER_COLUMNS}, (xmax = 0) AS inserted
            "#
        ))
        .bind(user_id)
        .bind(question_id)
        .bind(question_choice_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Answer already exists"))?;

        Ok((row.answer, row.inserted))
    }

    pub async fn update_choice(
        &self,
        id: Uuid,
        question_choice_id: Option<Uuid>,
    ) -> Result<BonusAnswer> {
        sqlx::query_as::<_, BonusAnswer>(&format!(
            r#"
            UPDATE bonus_answers
            SET question_choice_id = $2, updated_at = NOW()
            WHERE answer_id = $1
            RETURNING {ANSWER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(question_choice_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM bonus_answers WHERE answer_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
