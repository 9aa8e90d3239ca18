use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Submissions locked since {lock_at}")]
    Locked { lock_at: DateTime<Utc> },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Maps a failed write onto the domain taxonomy: unique violations become
    /// `Duplicate` with the given message, dangling references become `NotFound`.
    pub fn from_write(error: sqlx::Error, duplicate_message: &str) -> Self {
        let error = StorageError::from(error);
        if error.is_unique_violation() {
            StorageError::Duplicate(duplicate_message.to_string())
        } else if error.is_foreign_key_violation() {
            StorageError::NotFound
        } else {
            error
        }
    }
}
