//! Test helpers for the web API tests.

use std::sync::Arc;

use axum_test::TestServer;

use anonboard::web::handlers::AppState;
use anonboard::web::router::{create_health_router, create_router};
use anonboard::Database;

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    let db = Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    );

    let app_state = Arc::new(AppState::new(db.clone()));
    let router = create_router(app_state, &[]).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Post a thread and return its response body.
pub async fn post_thread(
    server: &TestServer,
    board: &str,
    text: &str,
    password: &str,
) -> serde_json::Value {
    let response = server
        .post(&format!("/api/threads/{board}"))
        .form(&serde_json::json!({
            "text": text,
            "delete_password": password,
        }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()
}

/// Post a reply and return its response body.
pub async fn post_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> serde_json::Value {
    let response = server
        .post(&format!("/api/replies/{board}"))
        .form(&serde_json::json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password,
        }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
