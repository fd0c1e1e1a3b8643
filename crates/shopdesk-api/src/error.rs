use std::fmt;

/// Result type for shopdesk-api operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Ways a request to the admin API can fail
#[derive(Debug)]
pub enum ApiError {
    /// Connection, timeout or other network failure
    Transport(String),

    /// Non-2xx HTTP status
    Status { code: u16, body: String },

    /// Body did not match the expected shape
    Decode(serde_json::Error),

    /// The API answered `{success: false}`
    Rejected(String),
}

impl ApiError {
    /// Message suitable for an operator-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(reason) => reason.clone(),
            ApiError::Status { code, .. } => format!("Server returned HTTP {}", code),
            ApiError::Transport(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status { code, body } if body.is_empty() => write!(f, "HTTP {}", code),
            ApiError::Status { code, body } => write!(f, "HTTP {}: {}", code, body),
            ApiError::Decode(err) => write!(f, "Decode error: {}", err),
            ApiError::Rejected(reason) => write!(f, "Rejected by API: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Decode(err) => Some(err),
            ApiError::Transport(_) | ApiError::Status { .. } | ApiError::Rejected(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
