mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_category_success() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "rust");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_category_empty_name() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/categories")
        .json(&json!({ "name": "  " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Category name cannot be empty");
}

#[tokio::test]
async fn test_read_categories_is_public() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = create_body["data"]["id"].as_str().unwrap();

    let anonymous = reqwest::Client::new();

    let list_response = anonymous
        .get(format!("{}/categories", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list_response.status(), StatusCode::OK);

    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
    assert_eq!(list_body["data"][0]["name"], "rust");

    let get_response = anonymous
        .get(format!("{}/categories/{}", app.address, category_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_category_not_found() {
    let app = TestApp::spawn().await;

    let missing_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .get(&format!("/categories/{}", missing_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        format!("Category with ID {} not found", missing_id)
    );
}

#[tokio::test]
async fn test_update_category() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/categories")
        .json(&json!({ "name": "rast" }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = create_body["data"]["id"].as_str().unwrap();

    let response = app
        .patch(&format!("/categories/{}", category_id))
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "rust");
    assert_eq!(body["data"]["id"], category_id);
}

#[tokio::test]
async fn test_delete_category() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = create_body["data"]["id"].as_str().unwrap();

    let delete_response = app
        .delete(&format!("/categories/{}", category_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    let get_response = app
        .get(&format!("/categories/{}", category_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_write_endpoints_require_session() {
    let app = TestApp::spawn().await;

    let create_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create_response.status(), StatusCode::UNAUTHORIZED);

    let category_id = uuid::Uuid::new_v4();

    let update_response = app
        .patch(&format!("/categories/{}", category_id))
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update_response.status(), StatusCode::UNAUTHORIZED);

    let delete_response = app
        .delete(&format!("/categories/{}", category_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::UNAUTHORIZED);
}
