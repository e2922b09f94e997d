use thiserror::Error;

/// Errors raised while validating, fetching or analyzing a page
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Error analyzing URL: {message}")]
    Analysis { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuditError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
