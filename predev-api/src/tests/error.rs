// Unit tests for the error taxonomy predicates

use crate::error::PredevError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_authentication_error_when_checked_then_only_auth_predicate_matches() {
    let error = PredevError::Authentication {
        message: String::from("Invalid API key"),
        location: here(),
    };

    assert!(error.is_authentication());
    assert!(!error.is_rate_limit());
    assert_eq!(error.status_code(), Some(HttpStatusCode(401)));
}

#[test]
fn given_rate_limit_error_when_checked_then_only_rate_limit_predicate_matches() {
    let error = PredevError::RateLimit {
        message: String::from("Rate limit exceeded"),
        location: here(),
    };

    assert!(error.is_rate_limit());
    assert!(!error.is_authentication());
    assert_eq!(error.status_code(), Some(HttpStatusCode(429)));
}

/// **VALUE**: Verifies transport failures stay generic with no status.
///
/// **WHY THIS MATTERS**: A DNS failure must not masquerade as a 4xx/5xx;
/// callers distinguish the two via `status_code()`.
#[test]
fn given_transport_style_api_error_when_checked_then_status_is_none() {
    let error = PredevError::Api {
        status: None,
        message: String::from("Request failed: connection refused"),
        location: here(),
    };

    assert!(!error.is_authentication());
    assert!(!error.is_rate_limit());
    assert_eq!(error.status_code(), None);
}

#[test]
fn given_errors_when_displayed_then_messages_are_caller_safe() {
    let error = PredevError::Api {
        status: Some(HttpStatusCode(500)),
        message: String::from("API request failed with status 500: boom"),
        location: here(),
    };

    let rendered = error.to_string();
    assert!(rendered.contains("API request failed with status 500: boom"));
}
