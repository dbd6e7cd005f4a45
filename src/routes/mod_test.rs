use super::*;
use crate::state::test_helpers;
use std::net::SocketAddr;

async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(test_helpers::test_app_state())).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn finance_route_returns_ledger_json() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/api/finance")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["transactions"].as_array().unwrap().len(), 4);
    assert_eq!(body["summary"]["net"], 3650.0);
}

#[tokio::test]
async fn every_api_page_route_is_mounted() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    for path in
        ["/api/overview", "/api/alerts", "/api/flocks", "/api/ponds", "/api/finance", "/api/consultant", "/healthz"]
    {
        let response = client.get(format!("http://{addr}{path}")).send().await.unwrap();
        assert_eq!(response.status(), 200, "{path} should be served by the API");
        if path != "/healthz" {
            let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
            assert!(content_type.starts_with("application/json"), "{path} returned {content_type}");
        }
    }
}

#[tokio::test]
async fn unknown_path_falls_back_to_shell() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/poultry/deep/link")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<!doctype html>"));
}
