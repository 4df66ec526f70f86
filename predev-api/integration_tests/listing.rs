use crate::helpers::{spec_page, start_mock_api};

use predev_api::{ListSpecsQuery, SpecEndpoint, SpecStatus};

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies pagination params go out exactly as supplied and
/// unset filters stay off the wire.
///
/// **BUG THIS CATCHES**: Would catch default filter values being sent as
/// empty parameters, which some server versions reject.
#[tokio::test]
async fn given_limit_and_skip_when_list_specs_then_only_those_params_sent() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/list-specs"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "5"))
        .and(query_param_is_missing("endpoint"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spec_page(42, true)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_specs(&ListSpecsQuery::new().with_limit(10).with_skip(5))
        .await
        .unwrap();

    assert_eq!(page.total, 42);
    assert!(page.has_more);
    assert_eq!(page.specs.len(), 1);
}

#[tokio::test]
async fn given_endpoint_filter_when_list_specs_then_tier_param_sent() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/list-specs"))
        .and(query_param("endpoint", "fast_spec"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spec_page(7, false)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_specs(
            &ListSpecsQuery::new()
                .with_limit(3)
                .with_endpoint(SpecEndpoint::FastSpec),
        )
        .await
        .unwrap();

    assert!(!page.has_more);
}

/// **VALUE**: Verifies search forwards the pattern verbatim alongside
/// filters.
///
/// **WHY THIS MATTERS**: The pattern is a server-side regex; the client
/// must not validate, escape, or reorder it - URL encoding is the only
/// transformation allowed.
#[tokio::test]
async fn given_regex_pattern_when_find_specs_then_query_and_status_params_sent() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/find-specs"))
        .and(query_param("query", "^Build"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(spec_page(2, false)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .find_specs(
            "^Build",
            &ListSpecsQuery::new().with_status(SpecStatus::Completed),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 2);
}
