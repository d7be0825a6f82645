use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Invalid argument '{name}' = {value}: {reason}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlotError {
    pub fn invalid_argument(name: &str, value: impl ToString, reason: &str) -> Self {
        PlotError::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlotError::InvalidArgument { .. } => ErrorCategory::Input,
            PlotError::ConfigValidationError { .. }
            | PlotError::InvalidConfigValueError { .. }
            | PlotError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlotError::ZipError(_)
            | PlotError::CsvError(_)
            | PlotError::IoError(_)
            | PlotError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlotError::InvalidArgument { .. }
            | PlotError::ConfigValidationError { .. }
            | PlotError::InvalidConfigValueError { .. }
            | PlotError::MissingConfigError { .. } => ErrorSeverity::High,
            // Retrying after fixing permissions or disk space usually works.
            PlotError::IoError(_) => ErrorSeverity::Medium,
            PlotError::ZipError(_) | PlotError::CsvError(_) | PlotError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlotError::InvalidArgument { name, .. } => {
                format!("Pass a non-negative integer for '{}'", name)
            }
            PlotError::ConfigValidationError { field, .. }
            | PlotError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your configuration", field)
            }
            PlotError::MissingConfigError { field } => {
                format!("Add the '{}' setting to your configuration", field)
            }
            PlotError::IoError(_) => {
                "Make sure the output directory exists and is writable".to_string()
            }
            PlotError::ZipError(_) | PlotError::CsvError(_) | PlotError::SerializationError(_) => {
                "This is an internal rendering failure; re-run with --verbose and report it"
                    .to_string()
            }
        }
    }

    /// Process exit code for a binary that stops on this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Output => format!("Could not write plot output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
