use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, header};
use std::sync::Arc;
use store_api::{
    config::{Config, StorageBackend},
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            in_memory::{InMemoryProductRepository, InMemoryReviewRepository, InMemoryUserRepository},
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
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise uses sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,store_api=debug,tower_http=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let (db, repositories) = match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for postgres storage"))?;
            let db = create_pool(database_url, config.database_max_connections).await?;
            let mut migrator = sqlx::migrate!("./migrations");
            migrator.set_ignore_missing(config.ignore_missing_migrations);
            migrator.run(&db).await?;

            let products = Arc::new(SqlxProductRepository::new(db.clone()));
            products.register_all(&config.seed_product_ids).await?;

            let repositories = Repositories {
                reviews: Arc::new(SqlxReviewRepository::new(db.clone())),
                users: Arc::new(SqlxUserRepository::new(db.clone())),
                products,
            };
            (Some(db), repositories)
        }
        StorageBackend::Memory => {
            tracing::warn!(
                seeded_products = config.seed_product_ids.len(),
                "Using in-memory storage; data is lost on shutdown"
            );
            let repositories = Repositories {
                reviews: Arc::new(InMemoryReviewRepository::new()),
                users: Arc::new(InMemoryUserRepository::new()),
                products: Arc::new(InMemoryProductRepository::with_products(
                    config.seed_product_ids.clone(),
                )),
            };
            (None, repositories)
        }
    };

    let hasher = Arc::new(BcryptPasswordHasher::new(config.password_hash_cost));
    let state = AppState::new(config.clone(), db, repositories, hasher);

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Store API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
