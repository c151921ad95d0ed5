mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn create_status_check_with_valid_client_name() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/api/status"))
        .json(&json!({ "client_name": "test_client_app" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["client_name"], "test_client_app");
    assert!(body.get("timestamp").is_some());

    // UUID format: 8-4-4-4-12
    let id = body["id"].as_str().expect("id is a string");
    assert_eq!(id.len(), 36);
    assert_eq!(Uuid::parse_str(id)?.hyphenated().to_string(), id);
    Ok(())
}

#[tokio::test]
async fn create_rejects_missing_or_invalid_client_name() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({ "client_name": 12 }), json!({ "name": "wrong_key" })] {
        let res = client.post(server.url("/api/status")).json(&payload).send().await?;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "payload: {}", payload);
    }

    // No JSON body at all
    let res = client.post(server.url("/api/status")).send().await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], true);

    assert!(server.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn empty_collection_lists_empty_array() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/api/status")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn created_checks_round_trip_through_list() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let mut created = Vec::new();
    for name in ["client_a", "client_b", "client_a"] {
        let body: Value = client
            .post(server.url("/api/status"))
            .json(&json!({ "client_name": name }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        created.push(body);
    }

    let res = client.get(server.url("/api/status")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Vec<Value> = res.json().await?;

    assert_eq!(listed.len(), created.len());
    for (listed, created) in listed.iter().zip(&created) {
        assert_eq!(listed["id"], created["id"]);
        assert_eq!(listed["client_name"], created["client_name"]);
        assert_eq!(listed["timestamp"], created["timestamp"]);
    }
    Ok(())
}
