use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Store API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "tags": [
            { "name": "Reviews", "description": "Reviews Management Endpoints" },
            { "name": "Users", "description": "User Management Endpoints" }
        ],
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/api/v1/reviews": { "post": { "summary": "Create a new review for a product" } },
            "/api/v1/reviews/{reviewId}": { "get": { "summary": "Get a review by id" } },
            "/api/v1/reviews/product/{productId}": { "get": { "summary": "Get reviews by product id" } },
            "/api/v1/reviews/user/{userId}": { "get": { "summary": "Get reviews by user id" } },
            "/api/v1/reviews/{reviewId}/like": { "put": { "summary": "Add a like to a review" } },
            "/api/v1/reviews/{reviewId}/unlike": { "put": { "summary": "Remove a like from a review" } },
            "/api/v1/users": { "post": { "summary": "Create a user account" } },
            "/api/v1/users/{userId}": { "get": { "summary": "Get a user by id" } }
        }
    }))
}
