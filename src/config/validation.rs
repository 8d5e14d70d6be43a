use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - If log file path is provided, it cannot point at an existing directory
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(log_file_path: &Option<String>) -> Result<(), AppError> {
    let Some(log_path) = log_file_path else {
        return Ok(());
    };

    if log_path.trim().is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    let path = Path::new(log_path);
    if path.is_dir() {
        return Err(AppError::config_error(format!(
            "Log file path '{log_path}' is a directory"
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
