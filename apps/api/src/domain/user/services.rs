use super::{commands::CreateUserCommand, entity::User, queries::GetUserByIdQuery};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait UserCommandService: Send + Sync {
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, DomainError>;
}

#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn get_by_id(&self, query: GetUserByIdQuery) -> Result<Option<User>, DomainError>;
}
