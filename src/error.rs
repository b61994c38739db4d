use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    ValidationError,
    InvalidReference,
    InvalidStatus,
    TaskNotFound,
    ConfigError,
    StorageError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct PmError {
    pub code: ErrorCode,
    pub message: String,
}

impl PmError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "pmtrack is not initialized. Run `pmtrack init` first.",
        )
    }

    /// Lists every required field that was left empty.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::new(
            ErrorCode::ValidationError,
            format!("Required fields missing: {}", fields.join(", ")),
        )
    }

    pub fn invalid_reference() -> Self {
        Self::new(
            ErrorCode::InvalidReference,
            "Invalid mould or checksheet selected.",
        )
    }

    pub fn invalid_status(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidStatus,
            format!(
                "Unknown status '{value}'. Expected one of: Scheduled, In Progress, Overdue, Completed"
            ),
        )
    }

    pub fn task_not_found(ticket_id: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {ticket_id}"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl From<rusqlite::Error> for PmError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for PmError {
    fn from(e: serde_json::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<std::io::Error> for PmError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}
