use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Error taxonomy for Pre.dev API calls.
///
/// Three kinds matter to callers: authentication (401), rate limiting
/// (429), and everything else (`Api`). The [`is_authentication`] and
/// [`is_rate_limit`] predicates substitute for downcasting; callers that
/// only want "did it fail" can match the enum broadly.
///
/// [`is_authentication`]: PredevError::is_authentication
/// [`is_rate_limit`]: PredevError::is_rate_limit
#[derive(Debug, ThisError)]
pub enum PredevError {
    /// Any non-2xx response not otherwise classified, a transport-level
    /// failure before a status was obtained (`status` is `None`), or an
    /// undecodable success body.
    #[error("API Error: {message} {location}")]
    Api {
        status: Option<HttpStatusCode>,
        message: String,
        location: ErrorLocation,
    },

    /// HTTP 401: the credential is missing, invalid, or expired.
    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    /// HTTP 429: the caller should back off. The client never retries on
    /// its own.
    #[error("Rate Limit Error: {message} {location}")]
    RateLimit {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Raised only by [`crate::polling::wait_for_completion`] when the job
    /// did not reach a terminal status within the attempt budget.
    #[error("Spec {spec_id} still not terminal after {attempts} polling attempts {location}")]
    PollingExhausted {
        spec_id: String,
        attempts: u32,
        location: ErrorLocation,
    },
}

impl PredevError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, PredevError::Authentication { .. })
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, PredevError::RateLimit { .. })
    }

    /// The HTTP status that produced this error, when one was obtained.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            PredevError::Api { status, .. } => *status,
            PredevError::Authentication { .. } => Some(HttpStatusCode(401)),
            PredevError::RateLimit { .. } => Some(HttpStatusCode(429)),
            PredevError::UrlParse { .. } | PredevError::PollingExhausted { .. } => None,
        }
    }
}

impl From<reqwest::Error> for PredevError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PredevError::Api {
            status: error.status().map(|s| HttpStatusCode::from(s.as_u16())),
            message: format!("Request failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for PredevError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        PredevError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PredevError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        PredevError::Api {
            status: None,
            message: format!("Failed to encode request: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
