use super::{
    commands::{AddLikeToReviewCommand, CreateReviewCommand, RemoveLikeFromReviewCommand},
    entity::Review,
    queries::{GetReviewByIdQuery, GetReviewsByProductIdQuery, GetReviewsByUserIdQuery},
};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewQueryService: Send + Sync {
    async fn get_by_id(&self, query: GetReviewByIdQuery) -> Result<Option<Review>, DomainError>;
    async fn get_by_product_id(
        &self,
        query: GetReviewsByProductIdQuery,
    ) -> Result<Vec<Review>, DomainError>;
    async fn get_by_user_id(
        &self,
        query: GetReviewsByUserIdQuery,
    ) -> Result<Vec<Review>, DomainError>;
}

#[async_trait]
pub trait ReviewCommandService: Send + Sync {
    async fn create_review(&self, command: CreateReviewCommand) -> Result<Review, DomainError>;
    /// Returns the like count after the like is recorded.
    async fn add_like(&self, command: AddLikeToReviewCommand) -> Result<usize, DomainError>;
    /// Returns the like count after the like is withdrawn.
    async fn remove_like(&self, command: RemoveLikeFromReviewCommand)
    -> Result<usize, DomainError>;
}
