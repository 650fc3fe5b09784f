mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn custom_error_is_localized_for_accept_language() {
    let (config, _catalogs) = ConfigBuilder::new().with_catalogs().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.get("/custom", Some("th-TH,th;q=0.9,en;q=0.8")).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "code": "CUS001", "message": "ข้อผิดพลาด" }));

    let resp = server.get("/custom", Some("en-US")).await;
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "code": "CUS001", "message": "Custom error" }));
}

#[tokio::test]
async fn unsupported_language_uses_default_catalog() {
    let (config, _catalogs) = ConfigBuilder::new().with_catalogs().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.get("/custom", Some("de")).await;
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Custom error");
}

#[tokio::test]
async fn custom_error_without_i18n_keeps_empty_message() {
    let (config, _catalogs) = ConfigBuilder::new().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.get("/custom", Some("th")).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "code": "CUS001", "message": "" }));
}

#[tokio::test]
async fn declined_errors_become_generic_bad_request() {
    let (config, _catalogs) = ConfigBuilder::new().with_catalogs().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.get("/failure", Some("th")).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "code": "BAD_REQUEST", "message": "Bad Request" }));
}
