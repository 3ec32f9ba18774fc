use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::TomlError(_)
            | FolioError::ConfigError { .. }
            | FolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FolioError::SerializationError(_) => ErrorCategory::Input,
            FolioError::IoError(_) | FolioError::ZipError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FolioError::IoError(_) => ErrorSeverity::Critical,
            FolioError::ZipError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FolioError::IoError(_) => "Check that the data file exists and the output directory is writable",
            FolioError::SerializationError(_) => "Make sure the portfolio data file is valid JSON",
            FolioError::TomlError(_) => "Make sure the site config file is valid TOML",
            FolioError::ZipError(_) => "Retry without --archive or free up disk space",
            FolioError::ConfigError { .. } => "Review the CLI flags and the site config file",
            FolioError::InvalidConfigValueError { .. } => {
                "Fix the reported setting in the CLI flags or the site config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::IoError(e) => format!("Could not read or write a file: {}", e),
            FolioError::SerializationError(e) => format!("Portfolio data could not be parsed: {}", e),
            FolioError::ZipError(e) => format!("Could not build the site archive: {}", e),
            other => other.to_string(),
        }
    }
}
