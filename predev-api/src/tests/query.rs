// Unit tests for list/search query construction

use crate::types::{ListSpecsQuery, SpecEndpoint, SpecStatus};

use url::Url;

/// **VALUE**: Verifies `limit=10, skip=5` produces exactly those two pairs.
///
/// **WHY THIS MATTERS**: Unset filters must not appear at all; some server
/// versions reject unknown-but-empty parameters.
#[test]
fn given_limit_and_skip_when_translated_then_exactly_two_pairs() {
    let query = ListSpecsQuery::new().with_limit(10).with_skip(5);

    let pairs = query.to_query_pairs();

    assert_eq!(
        pairs,
        vec![
            ("limit", String::from("10")),
            ("skip", String::from("5")),
        ]
    );
}

#[test]
fn given_empty_query_when_translated_then_no_pairs() {
    assert!(ListSpecsQuery::new().to_query_pairs().is_empty());
}

/// **VALUE**: Verifies filter values use the service's wire spellings.
///
/// **BUG THIS CATCHES**: Would catch `FastSpec` rendering as `fastspec` or
/// `FastSpec` instead of the documented `fast_spec` filter value.
#[test]
fn given_all_filters_when_translated_then_wire_spellings_used() {
    let query = ListSpecsQuery::new()
        .with_limit(3)
        .with_skip(0)
        .with_endpoint(SpecEndpoint::FastSpec)
        .with_status(SpecStatus::Completed);

    let pairs = query.to_query_pairs();

    assert_eq!(
        pairs,
        vec![
            ("limit", String::from("3")),
            ("skip", String::from("0")),
            ("endpoint", String::from("fast_spec")),
            ("status", String::from("completed")),
        ]
    );
}

/// **VALUE**: Verifies regex search patterns survive URL encoding.
///
/// **WHY THIS MATTERS**: Patterns pass through verbatim to the server-side
/// regex engine; the only transformation allowed is percent-encoding, so
/// `^Build` must become `query=%5EBuild` on the wire and nothing else.
#[test]
fn given_regex_pattern_when_url_encoded_then_caret_is_escaped() {
    let url = Url::parse_with_params(
        "https://api.pre.dev/api/find-specs",
        [("query", "^Build"), ("status", "completed")],
    )
    .unwrap();

    let query_string = url.query().unwrap();
    assert!(query_string.contains("query=%5EBuild"));
    assert!(query_string.contains("status=completed"));
}
