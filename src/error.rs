use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Task CLI error types
#[derive(Error, Debug)]
pub enum TaskError {
    /// Caller input problem (bad key, bad enum value, bad email)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading, parsing or writing the config file failed
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<BoxedCause>,
    },
}

impl TaskError {
    /// Build a storage error wrapping the underlying cause
    pub fn storage<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        TaskError::Storage {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            TaskError::Validation(_) => "VALIDATION_ERROR",
            TaskError::Storage { .. } => "STORAGE_ERROR",
        }
    }
}

/// Result type for Task operations
pub type Result<T> = std::result::Result<T, TaskError>;
