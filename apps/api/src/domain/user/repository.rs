use super::entity::User;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already taken.
    async fn insert(&self, user: &User) -> Result<(), DomainError>;
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn exists(&self, user_id: &str) -> Result<bool, DomainError>;
}
