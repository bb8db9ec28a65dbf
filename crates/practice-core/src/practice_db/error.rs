//! Error type for the practice store.

use thiserror::Error;

use crate::resolver::PracticeId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("practice {0} not found")]
    NotFound(PracticeId),

    /// A stored row could not be turned back into a definition.
    #[error("practice {id} has an invalid stored {field}: {reason}")]
    InvalidRecord {
        id: PracticeId,
        field: &'static str,
        reason: String,
    },

    #[error("score {0} is outside 0-100")]
    InvalidScore(f64),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("state directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
