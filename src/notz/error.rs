use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotzError {
    #[error("{0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("space already exists: {0}")]
    AlreadyExists(String),

    #[error("'{0}' is a reserved name")]
    Reserved(String),

    #[error("space '{0}' is currently selected")]
    ActiveSpace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(#[from] redb::Error),
}

// redb reports open/transaction/table/commit failures as distinct types;
// they all fold into the umbrella `redb::Error` so `?` works everywhere.
impl From<redb::DatabaseError> for NotzError {
    fn from(err: redb::DatabaseError) -> Self {
        NotzError::Storage(err.into())
    }
}

impl From<redb::TransactionError> for NotzError {
    fn from(err: redb::TransactionError) -> Self {
        NotzError::Storage(err.into())
    }
}

impl From<redb::TableError> for NotzError {
    fn from(err: redb::TableError) -> Self {
        NotzError::Storage(err.into())
    }
}

impl From<redb::StorageError> for NotzError {
    fn from(err: redb::StorageError) -> Self {
        NotzError::Storage(err.into())
    }
}

impl From<redb::CommitError> for NotzError {
    fn from(err: redb::CommitError) -> Self {
        NotzError::Storage(err.into())
    }
}

pub type Result<T> = std::result::Result<T, NotzError>;
