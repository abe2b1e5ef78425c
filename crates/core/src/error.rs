use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Cannot parse date-time: {input:?}")]
    ParseFailure { input: String },

    #[error("Clipboard rejected copy: {reason}")]
    Clipboard { reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
