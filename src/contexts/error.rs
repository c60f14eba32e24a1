use std::fmt;

/// Errors raised while loading issues
#[derive(Debug, Clone)]
pub enum IssueStoreError {
    /// Error when the issue file does not exist
    FileNotFound(String),
    /// Error when the issue file is not a valid issue list
    InvalidContent(String),
    /// Error when the home directory cannot be resolved
    HomeDirNotFound,
    /// IO related errors
    IoError(String),
}

impl fmt::Display for IssueStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueStoreError::FileNotFound(path) => write!(f, "Issue file not found: {}", path),
            IssueStoreError::InvalidContent(msg) => write!(f, "Invalid issue file: {}", msg),
            IssueStoreError::HomeDirNotFound => write!(f, "Home directory not found"),
            IssueStoreError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for IssueStoreError {}

impl From<std::io::Error> for IssueStoreError {
    fn from(err: std::io::Error) -> Self {
        IssueStoreError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for IssueStoreError {
    fn from(err: serde_json::Error) -> Self {
        IssueStoreError::InvalidContent(err.to_string())
    }
}

/// Result type for issue store operations
pub type IssueResult<T> = Result<T, IssueStoreError>;
