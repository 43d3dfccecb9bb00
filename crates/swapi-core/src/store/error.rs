use thiserror::Error;

use crate::record::CharacterId;

/// Storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Primary key already present; inserts never upsert.
    #[error("character {0} is already stored (rerun against a populated table?)")]
    DuplicateId(CharacterId),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot locate XDG state directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

impl StoreError {
    /// Map an INSERT failure, recognising the primary key collision.
    pub(crate) fn from_insert(err: sqlx::Error, id: CharacterId) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateId(id)
            }
            _ => StoreError::Database(err),
        }
    }
}
