mod common;

#[tokio::test]
async fn test_landing_page() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("action=\"/api/shorturl\""));
}

#[tokio::test]
async fn test_public_assets() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/public/style.css").await;
    response.assert_status_ok();

    let missing = server.get("/public/missing.css").await;
    missing.assert_status_not_found();
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .get("/api/shorturl/1")
        .add_header("Origin", "https://client.example.org")
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
