mod common;

use serde_json::json;

#[tokio::test]
async fn test_redirect_round_trip() {
    let server = common::create_test_server(common::create_test_state());

    let json = common::submit(&server, "https://www.example.com/target?x=1").await;
    let short_url = json["short_url"].as_i64().unwrap();

    let response = server.get(&format!("/api/shorturl/{short_url}")).await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://www.example.com/target?x=1");
}

#[tokio::test]
async fn test_redirect_location_is_percent_encoded() {
    let server = common::create_test_server(common::create_test_state());

    let json = common::submit(&server, "https://www.example.com/a b").await;
    assert_eq!(json["original_url"], "https://www.example.com/a b");

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.example.com/a%20b");
}

#[tokio::test]
async fn test_redirect_picks_matching_record() {
    let server = common::create_test_server(common::create_test_state());

    common::submit(&server, "https://example.com/first").await;
    common::submit(&server, "https://example.com/second").await;

    let response = server.get("/api/shorturl/2").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/second");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/shorturl/987654321").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "No short URL found" })
    );
}

#[tokio::test]
async fn test_redirect_non_numeric_identifier() {
    let server = common::create_test_server(common::create_test_state());
    common::submit(&server, "https://www.example.com").await;

    for id in ["abc", "0", "-1", "1.0"] {
        let response = server.get(&format!("/api/shorturl/{id}")).await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "error": "No short URL found" })
        );
    }
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::create_test_server(common::create_failing_state());

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Server error" })
    );
}
