use std::fmt;
use thiserror::Error;

/// A single malformed token inside a report line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid level '{token}' at column {column}")]
pub struct ParseLevelError {
    pub token: String,
    pub column: usize,
}

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read input '{path}': {source}")]
    InputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error on line {line}: {source}")]
    ParseError {
        line: usize,
        #[source]
        source: ParseLevelError,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorSeverity::Medium => "medium",
            ErrorSeverity::High => "high",
            ErrorSeverity::Critical => "critical",
        };
        f.write_str(label)
    }
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::IoError(_) | AnalyzerError::InputError { .. } => ErrorCategory::Input,
            AnalyzerError::ParseError { .. } => ErrorCategory::Parse,
            AnalyzerError::CsvError(_) | AnalyzerError::SerializationError(_) => {
                ErrorCategory::Output
            }
            AnalyzerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Critical,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnalyzerError::IoError(_) => "Check file permissions and available disk space".to_string(),
            AnalyzerError::InputError { path, .. } => {
                format!("Make sure '{}' exists and is readable, or pass --input", path)
            }
            AnalyzerError::ParseError { line, .. } => format!(
                "Fix line {} so it only contains integers, or rerun with --on-parse-error skip",
                line
            ),
            AnalyzerError::CsvError(_) => "Check that the --report-csv path is writable".to_string(),
            AnalyzerError::SerializationError(_) => "Rerun without --json".to_string(),
            AnalyzerError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value passed for {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyzerError::InputError { path, .. } => format!("Could not read reports from {}", path),
            AnalyzerError::ParseError { line, source } => {
                format!("Line {} is not a valid report ({})", line, source)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
