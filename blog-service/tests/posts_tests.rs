mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_post_success() {
    let app = TestApp::spawn().await;

    let author = app
        .register_and_log_in("nicola@example.com", "pass_word!")
        .await;
    let author_id = author["id"].as_str().unwrap();

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Hello world",
            "content": "The very first post."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Hello world");
    assert_eq!(body["data"]["content"], "The very first post.");
    assert_eq!(body["data"]["author_id"], author_id);
    assert_eq!(body["data"]["category_ids"], json!([]));
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_post_with_categories() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let category_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    let category_body: serde_json::Value = category_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = category_body["data"]["id"].as_str().unwrap();

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Ownership",
            "content": "Moves, borrows and lifetimes.",
            "category_ids": [category_id]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["category_ids"], json!([category_id]));
}

#[tokio::test]
async fn test_create_post_unknown_category() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let missing_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Ownership",
            "content": "Moves, borrows and lifetimes.",
            "category_ids": [missing_id]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        format!("Unknown category: {}", missing_id)
    );
}

#[tokio::test]
async fn test_create_post_malformed_category_id() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Ownership",
            "content": "Moves, borrows and lifetimes.",
            "category_ids": ["not-a-uuid"]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_empty_title() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "   ",
            "content": "Body without a headline."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        "Invalid title: Post title cannot be empty"
    );
}

#[tokio::test]
async fn test_create_post_requires_session() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Hello world",
            "content": "The very first post."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_read_posts_is_public() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/posts")
        .json(&json!({
            "title": "Hello world",
            "content": "The very first post."
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let post_id = create_body["data"]["id"].as_str().unwrap();

    // A client with no cookie store and no session reads posts just fine
    let anonymous = reqwest::Client::new();

    let list_response = anonymous
        .get(format!("{}/posts", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list_response.status(), StatusCode::OK);

    let list_body: serde_json::Value = list_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    let get_response = anonymous
        .get(format!("{}/posts/{}", app.address, post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::OK);

    let get_body: serde_json::Value = get_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(get_body["data"]["title"], "Hello world");
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::spawn().await;

    let missing_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .get(&format!("/posts/{}", missing_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        format!("Post with ID {} not found", missing_id)
    );
}

#[tokio::test]
async fn test_update_post_partial_fields() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/posts")
        .json(&json!({
            "title": "Hello world",
            "content": "The very first post."
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let post_id = create_body["data"]["id"].as_str().unwrap();

    let response = app
        .patch(&format!("/posts/{}", post_id))
        .json(&json!({ "title": "Hello again" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Hello again");

    // Fields left out of the patch keep their values
    assert_eq!(body["data"]["content"], "The very first post.");
}

#[tokio::test]
async fn test_update_post_replaces_category_links() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let category_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    let category_body: serde_json::Value = category_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = category_body["data"]["id"].as_str().unwrap();

    let create_response = app
        .post("/posts")
        .json(&json!({
            "title": "Ownership",
            "content": "Moves, borrows and lifetimes.",
            "category_ids": [category_id]
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let post_id = create_body["data"]["id"].as_str().unwrap();

    // An explicit empty list unlinks every category
    let response = app
        .patch(&format!("/posts/{}", post_id))
        .json(&json!({ "category_ids": [] }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["category_ids"], json!([]));
    assert_eq!(body["data"]["title"], "Ownership");
}

#[tokio::test]
async fn test_update_post_not_found() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let missing_id = uuid::Uuid::new_v4().to_string();
    let response = app
        .patch(&format!("/posts/{}", missing_id))
        .json(&json!({ "title": "Hello again" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let create_response = app
        .post("/posts")
        .json(&json!({
            "title": "Hello world",
            "content": "The very first post."
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let post_id = create_body["data"]["id"].as_str().unwrap();

    let delete_response = app
        .delete(&format!("/posts/{}", post_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    let get_response = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_requires_session() {
    let app = TestApp::spawn().await;

    let response = app
        .delete(&format!("/posts/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_category_unlinks_posts() {
    let app = TestApp::spawn().await;

    app.register_and_log_in("nicola@example.com", "pass_word!")
        .await;

    let category_response = app
        .post("/categories")
        .json(&json!({ "name": "rust" }))
        .send()
        .await
        .expect("Failed to execute request");
    let category_body: serde_json::Value = category_response
        .json()
        .await
        .expect("Failed to parse response");
    let category_id = category_body["data"]["id"].as_str().unwrap();

    let create_response = app
        .post("/posts")
        .json(&json!({
            "title": "Ownership",
            "content": "Moves, borrows and lifetimes.",
            "category_ids": [category_id]
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    let post_id = create_body["data"]["id"].as_str().unwrap();

    let delete_response = app
        .delete(&format!("/categories/{}", category_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

    // The post survives; only the link to the category is gone
    let get_response = app
        .get(&format!("/posts/{}", post_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::OK);

    let get_body: serde_json::Value = get_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(get_body["data"]["category_ids"], json!([]));
}
