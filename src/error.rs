use std::fmt;

/// Custom error type for platform operations
#[derive(Debug)]
pub enum PlatformError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Invalid combination of command-line flags
    Usage(String),
    /// Tenant not found in any source
    TenantNotFound(String),
    /// Platform URL not found in any source
    UrlNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Http(e) => write!(f, "HTTP request failed: {}", e),
            PlatformError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            PlatformError::Usage(msg) => write!(f, "{}", msg),
            PlatformError::TenantNotFound(msg) => write!(f, "{}", msg),
            PlatformError::UrlNotFound(msg) => write!(f, "{}", msg),
            PlatformError::Json(msg) => write!(f, "JSON error: {}", msg),
            PlatformError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlatformError {
    fn from(err: reqwest::Error) -> Self {
        PlatformError::Http(err)
    }
}

impl From<serde_json::Error> for PlatformError {
    fn from(err: serde_json::Error) -> Self {
        PlatformError::Json(err.to_string())
    }
}

impl From<std::io::Error> for PlatformError {
    fn from(err: std::io::Error) -> Self {
        PlatformError::Config(err.to_string())
    }
}

/// Result type alias for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
