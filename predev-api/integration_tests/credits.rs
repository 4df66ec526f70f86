use crate::helpers::{TEST_API_KEY, start_mock_api};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies the balance read parses the success flag and count.
#[tokio::test]
async fn given_account_when_get_credits_then_balance_returned() {
    let (server, client) = start_mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/credits"))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "credits": 140
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client.get_credits().await.unwrap();

    assert!(balance.success);
    assert_eq!(balance.credits, 140);
}
