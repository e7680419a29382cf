use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Mood picker and recommendations
        .route("/", get(handlers::index))
        .route("/recommendations", post(handlers::recommendations))
        // Reviews
        .route("/input_review", get(handlers::input_review))
        .route(
            "/submit_review",
            get(handlers::submit_review_redirect).post(handlers::submit_review),
        )
        .route("/reviews", get(handlers::reviews))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
