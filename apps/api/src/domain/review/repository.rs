use super::entity::Review;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Persistence port for reviews.
///
/// `add_like` and `remove_like` must apply the set change and read back the
/// resulting count as one atomic step. They return `Ok(None)` when the
/// review does not exist and never create one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: &Review) -> Result<(), DomainError>;
    async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, DomainError>;
    async fn find_by_product_id(&self, product_id: &str) -> Result<Vec<Review>, DomainError>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Review>, DomainError>;
    async fn add_like(&self, review_id: &str, user_id: &str)
    -> Result<Option<usize>, DomainError>;
    async fn remove_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<usize>, DomainError>;
}
