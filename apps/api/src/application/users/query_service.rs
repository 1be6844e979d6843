use crate::domain::{
    shared::errors::DomainError,
    user::{
        entity::User, queries::GetUserByIdQuery, repository::UserRepository,
        services::UserQueryService,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct UserQueryServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl UserQueryServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn get_by_id(&self, query: GetUserByIdQuery) -> Result<Option<User>, DomainError> {
        self.users.find_by_id(&query.user_id).await
    }
}
