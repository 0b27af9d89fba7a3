use std::fmt;

use query_cache::FetchError;
use remote_store::StoreError;

/// Central error types for the venue app
#[derive(Debug, Clone)]
pub enum AppError {
    /// The remote store rejected a read or write
    Remote(StoreError),
    /// A cached read failed
    Query(FetchError),
    /// Invalid user input (forms, public submissions)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// Missing or unusable configuration
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Remote(e) => write!(f, "Remote store error: {}", e),
            AppError::Query(e) => write!(f, "Query error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Remote(e)
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Query(e)
    }
}

/// User-friendly error messages for the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Remote(StoreError::Auth(msg)) => msg.clone(),
            AppError::Remote(_) | AppError::Query(_) => {
                "Something went wrong talking to the server. Please try again.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Config(_) => {
                "The site is not fully configured yet. Please try again later.".to_string()
            }
        }
    }
}
