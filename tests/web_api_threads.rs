//! Web API Thread Tests
//!
//! Integration tests for the /api/threads/:board endpoints.

mod common;

use common::{create_test_server, post_reply, post_thread};
use serde_json::{json, Value};

// ============================================================================
// Create Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_thread() {
    let (server, _db) = create_test_server().await;

    let body = post_thread(&server, "b1", "hi", "pw").await;

    assert!(body["_id"].is_string());
    assert_eq!(body["text"], "hi");
    assert_eq!(body["reported"], false);
    assert_eq!(body["replyCount"], 0);
    assert!(body["replies"].as_array().unwrap().is_empty());
    assert_eq!(body["created_on"], body["bumped_on"]);

    // The password hash must never leave the server
    assert!(body.get("delete_password").is_none());
}

#[tokio::test]
async fn test_create_thread_missing_password() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/b1")
        .form(&json!({"text": "hi"}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

// ============================================================================
// List Threads Tests
// ============================================================================

#[tokio::test]
async fn test_list_threads_unknown_board() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/threads/nope").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Board not found");
}

#[tokio::test]
async fn test_list_threads_shape() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "b1", "first", "pw").await;
    let second = post_thread(&server, "b1", "second", "pw").await;

    let response = server.get("/api/threads/b1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 2);

    // Most recently bumped first
    assert_eq!(threads[0]["_id"], second["_id"]);
    assert_eq!(threads[0]["text"], "second");
    assert!(threads[0]["replies"].as_array().unwrap().is_empty());

    // Moderation state never appears in the list view
    for thread in threads {
        assert!(thread.get("delete_password").is_none());
        assert!(thread.get("reported").is_none());
        assert!(thread.get("replyCount").is_none());
    }
}

#[tokio::test]
async fn test_list_threads_capped_and_ordered_by_bump() {
    let (server, _db) = create_test_server().await;

    let mut ids = Vec::new();
    for i in 0..11 {
        let body = post_thread(&server, "b1", &format!("thread {i}"), "pw").await;
        ids.push(body["_id"].as_str().unwrap().to_string());
    }

    // Replying to the oldest thread bumps it to the top
    post_reply(&server, "b1", &ids[0], "bump", "pw").await;

    let response = server.get("/api/threads/b1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let threads = body.as_array().unwrap();
    assert_eq!(threads.len(), 10);
    assert_eq!(threads[0]["_id"].as_str().unwrap(), ids[0]);
    assert_eq!(threads[1]["_id"].as_str().unwrap(), ids[10]);

    // bumped_on descending throughout
    let bumps: Vec<chrono::DateTime<chrono::Utc>> = threads
        .iter()
        .map(|t| t["bumped_on"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(bumps.windows(2).all(|w| w[0] >= w[1]));
}

// ============================================================================
// Delete Thread Tests
// ============================================================================

#[tokio::test]
async fn test_delete_thread_lifecycle() {
    let (server, _db) = create_test_server().await;

    let body = post_thread(&server, "b1", "hi", "pw").await;
    assert_eq!(body["text"], "hi");
    assert_eq!(body["reported"], false);
    let thread_id = body["_id"].as_str().unwrap().to_string();

    // Wrong password: 200, plain negative outcome, thread untouched
    let response = server
        .delete("/api/threads/b1")
        .form(&json!({"thread_id": thread_id, "delete_password": "wrong"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    let detail = server
        .get("/api/replies/b1")
        .add_query_param("thread_id", &thread_id)
        .await;
    detail.assert_status_ok();

    // Correct password: 200 "success"
    let response = server
        .delete("/api/threads/b1")
        .form(&json!({"thread_id": thread_id, "delete_password": "pw"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "success");

    // Thread (and its replies) gone
    let detail = server
        .get("/api/replies/b1")
        .add_query_param("thread_id", &thread_id)
        .await;
    detail.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_thread_unknown_targets() {
    let (server, _db) = create_test_server().await;

    let response = server
        .delete("/api/threads/nope")
        .form(&json!({"thread_id": "x", "delete_password": "pw"}))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Board not found");

    post_thread(&server, "b1", "hi", "pw").await;
    let response = server
        .delete("/api/threads/b1")
        .form(&json!({"thread_id": "no-such-thread", "delete_password": "pw"}))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Thread not found");
}

// ============================================================================
// Report Thread Tests
// ============================================================================

#[tokio::test]
async fn test_report_thread_no_password_needed() {
    let (server, _db) = create_test_server().await;

    let body = post_thread(&server, "b1", "hi", "pw").await;
    let thread_id = body["_id"].as_str().unwrap();

    let response = server
        .put("/api/threads/b1")
        .form(&json!({"thread_id": thread_id}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");

    // Reporting is repeatable and still succeeds
    let response = server
        .put("/api/threads/b1")
        .form(&json!({"thread_id": thread_id}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");
}

#[tokio::test]
async fn test_report_thread_unknown_thread() {
    let (server, _db) = create_test_server().await;

    post_thread(&server, "b1", "hi", "pw").await;

    let response = server
        .put("/api/threads/b1")
        .form(&json!({"thread_id": "missing"}))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Thread not found");
}

// ============================================================================
// Health Check
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
