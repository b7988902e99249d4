//! Custom error types for query and imagery processing

use std::fmt;
use std::io;

/// FloodKit-specific error types
#[derive(Debug)]
pub enum FloodError {
    /// I/O error
    IoError(io::Error),
    /// Region table parsing error
    CsvError(csv::Error),
    /// HTTP transport error talking to the imagery service
    HttpError(reqwest::Error),
    /// Invalid or incomplete configuration
    ConfigError(String),
    /// No region of interest could be matched
    RegionNotFound(String),
    /// Blank query text, nothing to resolve
    EmptyQuery,
    /// Invalid date range
    DateRange(String),
    /// Imagery service rejected or failed a request
    ServiceError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloodError::IoError(e) => write!(f, "I/O error: {}", e),
            FloodError::CsvError(e) => write!(f, "Region table error: {}", e),
            FloodError::HttpError(e) => write!(f, "HTTP error: {}", e),
            FloodError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FloodError::RegionNotFound(name) => write!(f, "No known region of interest matches '{}'", name),
            FloodError::EmptyQuery => write!(f, "Query text is empty, nothing to resolve"),
            FloodError::DateRange(msg) => write!(f, "Invalid date range: {}", msg),
            FloodError::ServiceError(msg) => write!(f, "Imagery service error: {}", msg),
            FloodError::GenericError(msg) => write!(f, "FloodKit error: {}", msg),
        }
    }
}

impl std::error::Error for FloodError {}

impl From<io::Error> for FloodError {
    fn from(error: io::Error) -> Self {
        FloodError::IoError(error)
    }
}

impl From<csv::Error> for FloodError {
    fn from(error: csv::Error) -> Self {
        FloodError::CsvError(error)
    }
}

impl From<reqwest::Error> for FloodError {
    fn from(error: reqwest::Error) -> Self {
        FloodError::HttpError(error)
    }
}

impl From<String> for FloodError {
    fn from(msg: String) -> Self {
        FloodError::GenericError(msg)
    }
}

/// Result type for FloodKit operations
pub type FloodResult<T> = Result<T, FloodError>;
