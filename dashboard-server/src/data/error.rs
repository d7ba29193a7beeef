//! Data API error types.

use std::fmt;

/// Errors from the metrics data API.
#[derive(Debug)]
pub enum DataError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Local file access failed (mock fixtures)
    Io {
        message: String,
        source: std::io::Error,
    },

    /// Rate limited by the API
    RateLimited,

    /// No data available for the requested stops
    NoData(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Http(e) => write!(f, "HTTP error: {e}"),
            DataError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DataError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DataError::Io { message, source } => write!(f, "{message}: {source}"),
            DataError::RateLimited => write!(f, "rate limited by data API"),
            DataError::NoData(what) => write!(f, "no data: {what}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Http(e) => Some(e),
            DataError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Http(err)
    }
}
