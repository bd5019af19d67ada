use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    Conflict,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Database connection failed: {0}")]
    DatabaseConnection(String),
}
