use crate::helpers::start_mock_api;

use predev_api::{ListSpecsQuery, PredevError, SpecRequest};

use serde_json::json;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies every operation classifies 401 as an
/// authentication error and nothing else.
///
/// **WHY THIS MATTERS**: Callers branch on the error kind to decide
/// between fixing credentials and backing off; a misclassified 401 sends
/// them down the wrong path.
///
/// **BUG THIS CATCHES**: Would catch any single operation bypassing the
/// shared response classifier.
#[tokio::test]
async fn given_401_when_any_operation_then_authentication_error() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let request = SpecRequest::new("Build a test app");
    let filters = ListSpecsQuery::new();

    let errors = vec![
        client.fast_spec(&request).await.unwrap_err(),
        client.deep_spec(&request).await.unwrap_err(),
        client.fast_spec_async(&request).await.unwrap_err(),
        client.deep_spec_async(&request).await.unwrap_err(),
        client.get_spec_status("spec_123").await.unwrap_err(),
        client.list_specs(&filters).await.unwrap_err(),
        client.find_specs("build", &filters).await.unwrap_err(),
        client.get_credits().await.unwrap_err(),
    ];

    for error in errors {
        assert!(error.is_authentication(), "expected auth error, got {error}");
        assert!(error.to_string().contains("Invalid API key"));
    }
}

/// **VALUE**: Verifies every operation classifies 429 as a rate-limit
/// error.
#[tokio::test]
async fn given_429_when_any_operation_then_rate_limit_error() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let request = SpecRequest::new("Build a test app");
    let filters = ListSpecsQuery::new();

    let errors = vec![
        client.fast_spec(&request).await.unwrap_err(),
        client.fast_spec_async(&request).await.unwrap_err(),
        client.get_spec_status("spec_123").await.unwrap_err(),
        client.list_specs(&filters).await.unwrap_err(),
        client.find_specs("build", &filters).await.unwrap_err(),
        client.get_credits().await.unwrap_err(),
    ];

    for error in errors {
        assert!(error.is_rate_limit(), "expected rate limit error, got {error}");
        assert!(error.to_string().contains("Rate limit exceeded"));
    }
}

/// **VALUE**: Verifies the server-provided error field surfaces in the
/// message.
#[tokio::test]
async fn given_500_with_error_field_then_message_contains_server_text() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Internal server error"})),
        )
        .mount(&server)
        .await;

    let error = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap_err();

    assert!(!error.is_authentication());
    assert!(!error.is_rate_limit());
    assert!(error.to_string().contains("Internal server error"));
    assert!(error.to_string().contains("500"));
}

/// **VALUE**: Verifies the `message` key works as the secondary lookup.
#[tokio::test]
async fn given_500_with_message_field_then_message_surfaces() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "Maintenance"})))
        .mount(&server)
        .await;

    let error = client.get_credits().await.unwrap_err();

    assert!(error.to_string().contains("Maintenance"));
}

/// **VALUE**: Verifies the fallback chain for unparseable bodies.
///
/// **WHY THIS MATTERS**: A broken error body must never trigger a
/// secondary parsing failure that masks the original status; the raw text
/// is the next best message, and a bare status line the last resort.
#[tokio::test]
async fn given_500_with_unparseable_body_then_raw_text_fallback() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("<<<not json>>>"))
        .mount(&server)
        .await;

    let error = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("<<<not json>>>"));
}

#[tokio::test]
async fn given_500_with_empty_body_then_bare_status_fallback() {
    let (server, client) = start_mock_api().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("HTTP 500"));
}

/// **VALUE**: Verifies transport failures surface as generic errors with
/// no status, not as fabricated 4xx/5xx.
#[tokio::test]
async fn given_unreachable_host_when_fast_spec_then_transport_error_unmasked() {
    let client = predev_api::PredevClient::with_base_url("key", "http://127.0.0.1:9").unwrap();

    let error = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap_err();

    assert!(matches!(error, PredevError::Api { .. }));
    assert_eq!(error.status_code(), None);
    assert!(error.to_string().contains("Request failed"));
}

/// **VALUE**: Verifies an invalid base URL fails at construction, before
/// any request is attempted.
#[tokio::test]
async fn given_invalid_base_url_when_constructing_then_url_parse_error() {
    let error = predev_api::PredevClient::with_base_url("key", "not a url").unwrap_err();

    assert!(matches!(error, PredevError::UrlParse { .. }));
}
