//! Error types for the Spotify client.

use thiserror::Error;

/// Main error type for all Spotify operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// A query argument was rejected before any request was made.
    #[error("Invalid {name}: {value}")]
    InvalidParameter {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was supplied.
        value: i64,
    },

    /// Recommendations need between 1 and 5 seeds in total.
    #[error("Needs 1 - 5 seeds, {provided} provided")]
    InvalidSeedCount {
        /// Number of seeds across artists, genres and tracks.
        provided: usize,
    },

    /// Non-success HTTP status, or the request never got a response.
    ///
    /// `status` is `None` for transport failures.
    #[error("Request failed ({}): {body}", status_label(.status))]
    RequestFailed { status: Option<u16>, body: String },

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response did not contain the field we extract.
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),

    /// The token provider could not produce an access token.
    #[error("No access token: {0}")]
    Token(String),

    /// Client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

impl SpotifyError {
    /// True for errors raised locally while validating arguments.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            SpotifyError::InvalidParameter { .. } | SpotifyError::InvalidSeedCount { .. }
        )
    }

    /// HTTP status of a failed request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}

/// Result type alias for Spotify operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
