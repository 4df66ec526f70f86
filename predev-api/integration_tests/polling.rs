use crate::helpers::{completed_spec, processing_spec, start_mock_api};

use predev_api::{PollOptions, PredevError, SpecStatus, wait_for_completion};

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn quick_poll(max_attempts: u32) -> PollOptions {
    PollOptions {
        interval: Duration::from_millis(10),
        max_attempts,
    }
}

/// **VALUE**: Verifies the helper loops past non-terminal statuses and
/// returns the completed result.
///
/// **WHY THIS MATTERS**: This is the one convenience the crate layers on
/// top of raw status reads; if the terminal-state predicate is wrong the
/// loop either stops early or spins forever.
///
/// **BUG THIS CATCHES**: Would catch `processing` being treated as
/// terminal, or the final response being discarded.
#[tokio::test]
async fn given_job_completes_when_waiting_then_returns_terminal_response() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(processing_spec("spec_123")))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .mount(&server)
        .await;

    let result = wait_for_completion(&client, "spec_123", quick_poll(10))
        .await
        .unwrap();

    assert_eq!(result.status, Some(SpecStatus::Completed));
}

/// **VALUE**: Verifies a failed job is returned as data, not an error.
///
/// **WHY THIS MATTERS**: `failed` is a terminal job state owned by the
/// server; the transport worked fine. Callers read `error_message` off
/// the result.
#[tokio::test]
async fn given_job_fails_when_waiting_then_failed_response_is_data() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "specId": "spec_456",
            "status": "failed",
            "errorMessage": "Input too ambiguous"
        })))
        .mount(&server)
        .await;

    let result = wait_for_completion(&client, "spec_456", quick_poll(5))
        .await
        .unwrap();

    assert_eq!(result.status, Some(SpecStatus::Failed));
    assert_eq!(result.error_message.as_deref(), Some("Input too ambiguous"));
}

/// **VALUE**: Verifies the attempt budget is honored.
#[tokio::test]
async fn given_job_never_finishes_when_waiting_then_polling_exhausted() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(processing_spec("spec_789")))
        .expect(3)
        .mount(&server)
        .await;

    let error = wait_for_completion(&client, "spec_789", quick_poll(3))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        PredevError::PollingExhausted { attempts: 3, .. }
    ));
}

/// **VALUE**: Verifies transport/classification errors cut the loop short.
#[tokio::test]
async fn given_status_check_fails_when_waiting_then_error_propagates_immediately() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_000"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let error = wait_for_completion(&client, "spec_000", quick_poll(10))
        .await
        .unwrap_err();

    assert!(error.is_authentication());
}
