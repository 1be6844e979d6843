use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use sqlx::PgPool;
use store_api::{
    config::{Config, StorageBackend},
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            in_memory::{
                InMemoryProductRepository, InMemoryReviewRepository, InMemoryUserRepository,
            },
            sqlx_product_repository::SqlxProductRepository,
            sqlx_review_repository::SqlxReviewRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::password::BcryptPasswordHasher,
    },
    presentation::http::{
        routes::create_router,
        state::{AppState, Repositories},
    },
};
use tower::ServiceExt;
use uuid::Uuid;

pub const PRODUCT_ID: &str = "prod-keyboard";
pub const OTHER_PRODUCT_ID: &str = "prod-mouse";

pub struct TestApp {
    pub app: Router,
    pub products: Arc<InMemoryProductRepository>,
}

fn build_config() -> Config {
    Config {
        storage_backend: StorageBackend::Memory,
        database_url: None,
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        password_hash_cost: 4,
        seed_product_ids: vec![PRODUCT_ID.to_string(), OTHER_PRODUCT_ID.to_string()],
        ignore_missing_migrations: true,
    }
}

pub fn spawn_app() -> TestApp {
    let config = build_config();
    let products = Arc::new(InMemoryProductRepository::with_products(
        config.seed_product_ids.clone(),
    ));
    let repositories = Repositories {
        reviews: Arc::new(InMemoryReviewRepository::new()),
        users: Arc::new(InMemoryUserRepository::new()),
        products: products.clone(),
    };
    let hasher = Arc::new(BcryptPasswordHasher::new(config.password_hash_cost));
    let state = AppState::new(config, None, repositories, hasher);

    TestApp {
        app: create_router(state),
        products,
    }
}

/// Connects to `DATABASE_URL` and applies migrations.
///
/// Returns `None` when the variable is unset so the suite still runs on
/// machines without PostgreSQL.
pub async fn postgres_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping postgres-backed test");
        return None;
    };

    let db = create_pool(&database_url, 10)
        .await
        .expect("failed to create pool");
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(true);
    migrator.run(&db).await.expect("migrations failed");
    Some(db)
}

/// Router wired to the sqlx repositories, with the test catalog seeded.
pub async fn spawn_postgres_app(db: PgPool) -> Router {
    let mut config = build_config();
    config.storage_backend = StorageBackend::Postgres;

    let products = Arc::new(SqlxProductRepository::new(db.clone()));
    products
        .register_all(&config.seed_product_ids)
        .await
        .expect("failed to seed products");

    let repositories = Repositories {
        reviews: Arc::new(SqlxReviewRepository::new(db.clone())),
        users: Arc::new(SqlxUserRepository::new(db.clone())),
        products,
    };
    let hasher = Arc::new(BcryptPasswordHasher::new(config.password_hash_cost));
    create_router(AppState::new(config, Some(db), repositories, hasher))
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::now_v7())
}

pub async fn create_user(app: &Router) -> String {
    let req = json_request(
        Method::POST,
        "/api/v1/users",
        json!({
            "firstName": "Rosa",
            "lastName": "Huaman",
            "email": unique_email("reviewer"),
            "password": "StrongPass123!",
            "country": "Peru",
            "city": "Arequipa",
            "street": "Calle Mercaderes 210",
            "zip": "04001"
        }),
    );
    let res = expect_status(send(app, req).await, StatusCode::CREATED).await;
    let body: Value = read_json(res).await;
    body["userId"]
        .as_str()
        .expect("missing userId in create user response")
        .to_string()
}

pub async fn create_review(app: &Router, product_id: &str, user_id: &str) -> String {
    let req = json_request(
        Method::POST,
        "/api/v1/reviews",
        json!({
            "productId": product_id,
            "userId": user_id,
            "content": "Keys feel great, shipping was quick.",
            "rating": 5
        }),
    );
    let res = expect_status(send(app, req).await, StatusCode::CREATED).await;
    let body: Value = read_json(res).await;
    body["id"]
        .as_str()
        .expect("missing id in create review response")
        .to_string()
}

pub async fn put_like(app: &Router, review_id: &str, action: &str, user_id: &str) -> Value {
    let req = json_request(
        Method::PUT,
        &format!("/api/v1/reviews/{}/{}", review_id, action),
        json!({ "userId": user_id }),
    );
    let res = expect_status(send(app, req).await, StatusCode::OK).await;
    read_json(res).await
}
