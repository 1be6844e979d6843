use crate::{
    application::{
        reviews::{
            command_service::ReviewCommandServiceImpl, query_service::ReviewQueryServiceImpl,
        },
        users::{command_service::UserCommandServiceImpl, query_service::UserQueryServiceImpl},
    },
    config::Config,
    domain::{
        product::repository::ProductRepository,
        review::{
            repository::ReviewRepository,
            services::{ReviewCommandService, ReviewQueryService},
        },
        user::{
            repository::UserRepository,
            services::{UserCommandService, UserQueryService},
        },
    },
    infrastructure::security::password::PasswordHasher,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when running on the in-memory backend
    pub db: Option<PgPool>,
    pub config: Config,
    pub review_queries: Arc<dyn ReviewQueryService>,
    pub review_commands: Arc<dyn ReviewCommandService>,
    pub user_queries: Arc<dyn UserQueryService>,
    pub user_commands: Arc<dyn UserCommandService>,
}

/// Storage ports the services are built on.
pub struct Repositories {
    pub reviews: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Option<PgPool>,
        repositories: Repositories,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let Repositories {
            reviews,
            users,
            products,
        } = repositories;

        Self {
            db,
            config,
            review_queries: Arc::new(ReviewQueryServiceImpl::new(reviews.clone())),
            review_commands: Arc::new(ReviewCommandServiceImpl::new(
                reviews,
                products,
                users.clone(),
            )),
            user_queries: Arc::new(UserQueryServiceImpl::new(users.clone())),
            user_commands: Arc::new(UserCommandServiceImpl::new(users, hasher)),
        }
    }
}
