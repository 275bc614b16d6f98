//! Router configuration for the anonboard API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let thread_routes = Router::new().route(
        "/threads/:board",
        post(create_thread)
            .get(list_threads)
            .delete(delete_thread)
            .put(report_thread),
    );

    let reply_routes = Router::new().route(
        "/replies/:board",
        get(get_thread)
            .post(create_reply)
            .delete(delete_reply)
            .put(report_reply),
    );

    let api_routes = thread_routes.merge(reply_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
