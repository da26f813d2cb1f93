mod common;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use tinylink::api::routes::link_routes;

fn test_server() -> (TestServer, Arc<common::InMemoryLinkRepository>) {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .nest("/api/links", link_routes())
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_create_link_generates_six_char_code() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["url"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "code": "promo247" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    assert_eq!(body["code"], "promo247");
    assert!(repo.get("promo247").is_some());
}

#[tokio::test]
async fn test_create_link_custom_code_conflict() {
    let (server, repo) = test_server();
    repo.seed("taken123", "https://first.com");

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://second.com", "code": "taken123" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "code already exists");
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let (server, _repo) = test_server();

    let response = server.post("/api/links").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "url is required");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "invalid url");
}

#[tokio::test]
async fn test_create_link_code_below_minimum_length() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://a.com", "code": "short" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_link_code_with_invalid_characters() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://a.com", "code": "my-code1" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_link_reserved_code_rejected() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://a.com", "code": "healthz" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_link_blank_code_falls_back_to_generation() {
    let (server, _repo) = test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://a.com", "code": "" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    assert_eq!(body["code"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, _repo) = test_server();

    for url in ["https://first.com", "https://second.com"] {
        let response = server.post("/api/links").json(&json!({ "url": url })).await;
        assert_eq!(response.status_code(), 201);
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["url"], "https://second.com");
    assert_eq!(links[1]["url"], "https://first.com");
}

#[tokio::test]
async fn test_get_link_returns_stats() {
    let (server, repo) = test_server();
    repo.seed("stats01", "https://example.com");

    let response = server.get("/api/links/stats01").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["code"], "stats01");
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _repo) = test_server();

    let response = server.get("/api/links/missing").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn test_delete_link() {
    let (server, repo) = test_server();
    repo.seed("delme01", "https://example.com");

    let response = server.delete("/api/links/delme01").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["ok"], true);
    assert!(repo.get("delme01").is_none());

    let response = server.get("/api/links/delme01").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (server, _repo) = test_server();

    let response = server.delete("/api/links/missing").await;

    response.assert_status_not_found();
}
