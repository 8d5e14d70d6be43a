use crate::person_name::NamePart;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid name component: {part} must not be empty")]
    InvalidNameComponent { part: NamePart },

    #[error("Failed to parse person records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid name component error for the given part
    pub fn invalid_name_component(part: NamePart) -> Self {
        Self::InvalidNameComponent { part }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error was caused by a malformed name rather than I/O or config
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, AppError::InvalidNameComponent { .. })
    }
}
