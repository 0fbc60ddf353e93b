use std::fmt;

/// Custom error types for the meadow simulation
#[derive(Debug)]
pub enum SimError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Invalid line format in meadow file
    InvalidLine(String),
    /// Rejected constructor or validator input
    InvalidArgument(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IoError(err) => write!(f, "IO error: {}", err),
            SimError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            SimError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
