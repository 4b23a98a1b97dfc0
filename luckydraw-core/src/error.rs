use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Number required")]
    MissingNumber,

    #[error("Invalid winner number: {0}")]
    NotNumeric(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawError {
    pub fn not_numeric(msg: impl Into<String>) -> Self {
        Self::NotNumeric(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is the caller's fault (maps to HTTP 400).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingNumber | Self::NotNumeric(_))
    }
}
