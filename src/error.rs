use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// An identifier argument failed validation; carries the parameter name
    InvalidIdentifier(&'static str),
    /// HTTP request failed (connection, timeout, body read)
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Response body did not match the expected document
    Json(String),
    /// The caller's cancellation token fired before the call completed
    Cancelled,
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// Configuration error
    Config(String),
}

impl TfeError {
    /// True when the backend answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, TfeError::Api { status: 404, .. })
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::InvalidIdentifier(param) => write!(f, "invalid value for {}", param),
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Cancelled => write!(f, "request cancelled"),
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::HostNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Credentials(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
