use serde::Deserialize;

/// Error body returned by PostgREST (and the Supabase API gateway in front of it).
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestErrorResponse {
    /// Extract the most informative error message from the response.
    pub fn error_message(&self) -> String {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Unknown error")
            .to_string()
    }
}

/// All errors that can occur while fetching a table.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, or reading the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request failed ({status}): {message}")]
    Status {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Writing the body to the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`FetchError::Status`] from a failed response body.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = parse_error_message(&body);
        Self::Status {
            status,
            message,
            body,
        }
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result alias using FetchError.
pub type FetchResult<T> = Result<T, FetchError>;

/// Try to parse an error message from the response body (JSON first, then plain text).
fn parse_error_message(body: &str) -> String {
    if let Ok(api_err) = serde_json::from_str::<PostgrestErrorResponse>(body) {
        if api_err.message.is_some() || api_err.error.is_some() {
            return api_err.error_message();
        }
    }
    if body.trim().is_empty() {
        return "empty response body".to_string();
    }
    body.to_string()
}
