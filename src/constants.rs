//! Application-wide constants
//!
//! Centralizes names and paths shared by the config, logging and CLI layers.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "person_names";

/// Config file name inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Subdirectory for log files inside the app directory
pub const LOG_DIR_NAME: &str = "logs";

/// Default log file name (the rolling appender appends a date suffix)
pub const LOG_FILE_NAME: &str = "person_names.log";

/// Default tracing directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "person_names=info";

/// Environment variable names
pub mod env_vars {
    /// Override the default name style (full, middle-initial, initials)
    pub const STYLE: &str = "PERSON_NAMES_STYLE";

    /// Override the log file path
    pub const LOG_FILE: &str = "PERSON_NAMES_LOG_FILE";
}
