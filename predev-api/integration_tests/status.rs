use crate::helpers::{TEST_API_KEY, completed_spec, processing_spec, start_mock_api};

use predev_api::SpecStatus;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies the status read is keyed by the opaque identifier.
///
/// **BUG THIS CATCHES**: Would catch the identifier being mangled or
/// url-mapped somewhere between the handle and the status path.
#[tokio::test]
async fn given_spec_id_when_get_status_then_fetches_by_id() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_123"))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get_spec_status("spec_123").await.unwrap();

    assert_eq!(result.status, Some(SpecStatus::Completed));
    assert!(result.coding_agent_spec_url.is_some());
}

/// **VALUE**: Verifies earlier-stage results parse with sparse fields.
#[tokio::test]
async fn given_processing_job_when_get_status_then_sparse_fields_tolerated() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(processing_spec("spec_456")))
        .mount(&server)
        .await;

    let result = client.get_spec_status("spec_456").await.unwrap();

    assert_eq!(result.status, Some(SpecStatus::Processing));
    assert_eq!(result.progress.as_deref(), Some("Drafting architecture"));
    assert!(result.coding_agent_spec_url.is_none());
}

/// **VALUE**: Verifies there is no local caching: every call re-fetches.
///
/// **WHY THIS MATTERS**: Polling relies on each status call hitting the
/// service; a cached response would spin forever on `processing`.
#[tokio::test]
async fn given_repeated_status_calls_then_each_hits_the_service() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/spec-status/spec_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(processing_spec("spec_123")))
        .expect(3)
        .mount(&server)
        .await;

    for _ in 0..3 {
        client.get_spec_status("spec_123").await.unwrap();
    }
}
