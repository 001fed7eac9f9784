mod common;

#[tokio::test]
async fn test_index_without_authorization() {
    let app = common::make_server();

    let response = app.server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(!body.is_empty());
    assert!(body.contains("kvlink-test"));
}

#[tokio::test]
async fn test_index_any_method() {
    let app = common::make_server();

    app.server.post("/").await.assert_status_ok();
    app.server.delete("/").await.assert_status_ok();
    app.server.put("/").await.assert_status_ok();
}

#[tokio::test]
async fn test_index_independent_of_store() {
    let app = common::make_server();
    common::seed_link(&app.store, "docs", "https://example.com/docs").await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    assert!(!response.text().contains("https://example.com/docs"));
}
