// src/errors.rs

/// Result type alias for the poll service
pub type Result<T> = std::result::Result<T, Error>;

/// Client-correctable input problems, detected before anything is persisted
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be between 5 and 60 characters")]
    TitleLength,

    #[error("You must provide between 2 and 10 options")]
    ChoiceCount,

    #[error("Options must be between 1 and 60 characters")]
    ChoiceLength,

    #[error("Options must be unique")]
    DuplicateChoice,

    #[error("Invalid option")]
    UnknownOption,
}

/// Failures of the persistence collaborator
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Main error type for the poll service
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Poll not found")]
    NotFound,

    #[error("Missing parameters")]
    MissingParameters,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Message shown to the caller. Store details never leave the process.
    pub fn public_message(&self) -> String {
        match self {
            Error::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Store(_))
    }
}
