mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn submission() -> Value {
    json!({
        "title": "City Reading Room",
        "categoryId": "category-library",
        "regionId": "region-kalupur",
        "address": "Relief Road",
        "description": "Quiet reading room with free wifi",
        "phone": "",
        "email": "room@example.org"
    })
}

#[tokio::test]
async fn test_submit_success_is_not_listed() {
    let server = common::make_server();

    let response = server.post("/api/resources").json(&submission()).await;
    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], "resource-city-reading-room");
    assert_eq!(json["message"], "Resource submitted for review");

    let listing = server.get("/api/resources").await.json::<Value>();
    assert_eq!(listing["total"], 6);

    server
        .get("/api/resources/city-reading-room")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_missing_fields() {
    let server = common::make_server();

    let response = server
        .post("/api/resources")
        .json(&json!({ "title": "  ", "categoryId": "category-library" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Missing required fields");
    assert_eq!(
        json["error"]["details"]["missing"],
        json!(["title", "regionId", "address", "description"])
    );
}

#[tokio::test]
async fn test_submit_unknown_region() {
    let server = common::make_server();

    let mut body = submission();
    body["regionId"] = json!("region-atlantis");

    let response = server.post("/api/resources").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Unknown region"
    );
}

#[tokio::test]
async fn test_submit_invalid_email() {
    let server = common::make_server();

    let mut body = submission();
    body["email"] = json!("not-an-email");

    server
        .post("/api/resources")
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_duplicate_title_conflicts() {
    let server = common::make_server();

    let mut body = submission();
    body["title"] = json!("M.J. Library");

    let response = server.post("/api/resources").json(&body).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_submit_twice_conflicts() {
    let server = common::make_server();

    server
        .post("/api/resources")
        .json(&submission())
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/resources")
        .json(&submission())
        .await
        .assert_status(StatusCode::CONFLICT);
}
