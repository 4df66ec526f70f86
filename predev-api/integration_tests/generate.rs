use crate::helpers::{TEST_API_KEY, completed_spec, pending_handle, start_mock_api};

use predev_api::{FileAttachment, SpecRequest, SpecStatus};

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies the happy path: JSON body, auth header, parsed result.
///
/// **WHY THIS MATTERS**: This is the primary operation of the whole crate.
///
/// **BUG THIS CATCHES**: Would catch the credential landing in the wrong
/// header, the depth tier hitting the wrong path, or the result shape
/// failing to parse.
#[tokio::test]
async fn given_minimal_request_when_fast_spec_then_returns_completed_response() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/fast-spec"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_partial_json(json!({"input": "Build a todo app"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap();

    assert_eq!(result.status, Some(SpecStatus::Completed));
    assert_eq!(
        result.coding_agent_spec_url.as_deref(),
        Some("https://pre.dev/s/spec_123/agent")
    );
    assert_eq!(
        result.human_spec_url.as_deref(),
        Some("https://pre.dev/s/spec_123/human")
    );
}

/// **VALUE**: Verifies depth tiers map to their fixed paths.
#[tokio::test]
async fn given_request_when_deep_spec_then_posts_to_deep_endpoint() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/deep-spec"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_456")))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .deep_spec(&SpecRequest::new("Build an ERP system"))
        .await
        .unwrap();

    assert_eq!(result.spec_id.as_deref(), Some("spec_456"));
}

/// **VALUE**: Verifies JSON-mode requests carry the JSON content type.
#[tokio::test]
async fn given_no_attachment_when_fast_spec_then_content_type_is_json() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/fast-spec"))
        .and(header_regex("content-type", "^application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .expect(1)
        .mount(&server)
        .await;

    client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap();
}

/// **VALUE**: Verifies attaching a file switches the whole request to
/// multipart with a reqwest-computed boundary.
///
/// **WHY THIS MATTERS**: A manually-fixed `application/json` (or a
/// boundary-less multipart header) corrupts the form body; the boundary
/// must come from the encoding layer.
///
/// **BUG THIS CATCHES**: Would catch the JSON content type leaking into
/// the multipart branch, or the file landing under the wrong field name.
#[tokio::test]
async fn given_attachment_when_fast_spec_then_multipart_with_boundary() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/fast-spec"))
        .and(header_regex(
            "content-type",
            "^multipart/form-data; boundary=.+",
        ))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"requirements.md\""))
        .and(body_string_contains("Build a wiki"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .expect(1)
        .mount(&server)
        .await;

    let request = SpecRequest::new("Build a wiki").with_attachment(
        FileAttachment::new(b"# Requirements".to_vec())
            .with_file_name("requirements.md")
            .with_content_type("text/markdown"),
    );

    client.fast_spec(&request).await.unwrap();
}

/// **VALUE**: Verifies array fields travel as one JSON-encoded text part
/// in the multipart branch.
#[tokio::test]
async fn given_attachment_and_doc_urls_when_encoded_then_urls_are_one_json_part() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/deep-spec"))
        .and(body_string_contains("name=\"docURLs\""))
        .and(body_string_contains("[\"https://docs.pre.dev\"]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_456")))
        .expect(1)
        .mount(&server)
        .await;

    let request = SpecRequest::new("Build a payments service")
        .with_doc_urls(vec![String::from("https://docs.pre.dev")])
        .with_attachment(FileAttachment::new(vec![0x25, 0x50, 0x44, 0x46]).with_content_type("application/pdf"));

    client.deep_spec(&request).await.unwrap();
}

/// **VALUE**: Verifies async mode returns immediately with only a handle.
///
/// **WHY THIS MATTERS**: The async contract is "never block on job
/// completion" - the response is an identifier plus a non-terminal status,
/// and the request body must carry the `async` flag so the server knows
/// not to hold the connection.
///
/// **BUG THIS CATCHES**: Would catch the async flag going missing (the
/// server would block for the full generation) or the handle shape
/// failing to parse.
#[tokio::test]
async fn given_async_mode_when_fast_spec_async_then_returns_pending_handle() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/fast-spec"))
        .and(body_partial_json(json!({"async": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_handle("spec_789")))
        .expect(1)
        .mount(&server)
        .await;

    let handle = client
        .fast_spec_async(&SpecRequest::new("Build an e-commerce platform"))
        .await
        .unwrap();

    assert_eq!(handle.spec_id, "spec_789");
    assert_eq!(handle.status, SpecStatus::Pending);
    assert!(!handle.status.is_terminal());
}

/// **VALUE**: Verifies deep async submissions hit the deep path with the flag.
#[tokio::test]
async fn given_async_mode_when_deep_spec_async_then_returns_handle() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/deep-spec"))
        .and(body_partial_json(json!({"async": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_handle("spec_790")))
        .expect(1)
        .mount(&server)
        .await;

    let handle = client
        .deep_spec_async(&SpecRequest::new("Build a fintech platform"))
        .await
        .unwrap();

    assert_eq!(handle.spec_id, "spec_790");
}

/// **VALUE**: Verifies enterprise clients use the enterprise header and
/// never send the solo one.
#[tokio::test]
async fn given_enterprise_client_when_fast_spec_then_enterprise_header_used() {
    let (server, _) = start_mock_api().await;
    let client =
        predev_api::PredevClient::enterprise_with_base_url(TEST_API_KEY, &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/fast-spec"))
        .and(header("x-enterprise-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_spec("spec_123")))
        .expect(1)
        .mount(&server)
        .await;

    let received = client
        .fast_spec(&SpecRequest::new("Build a todo app"))
        .await
        .unwrap();
    assert!(received.success);

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests
            .iter()
            .all(|request| !request.headers.contains_key("x-api-key"))
    );
}
