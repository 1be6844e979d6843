use super::{
    handlers::{docs, health, reviews, users},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use http::{Method, header};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Cross-origin access is open to any origin for the verbs the API serves.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        // Reviews
        .route("/api/v1/reviews", post(reviews::create_review))
        .route("/api/v1/reviews/{review_id}", get(reviews::get_review_by_id))
        .route(
            "/api/v1/reviews/product/{product_id}",
            get(reviews::get_reviews_by_product_id),
        )
        .route(
            "/api/v1/reviews/user/{user_id}",
            get(reviews::get_reviews_by_user_id),
        )
        .route(
            "/api/v1/reviews/{review_id}/like",
            put(reviews::add_like_to_review),
        )
        .route(
            "/api/v1/reviews/{review_id}/unlike",
            put(reviews::remove_like_from_review),
        )
        // Users
        .route("/api/v1/users", post(users::create_user))
        .route("/api/v1/users/{user_id}", get(users::get_user_by_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
