use crate::domain::{
    review::{
        entity::Review,
        queries::{GetReviewByIdQuery, GetReviewsByProductIdQuery, GetReviewsByUserIdQuery},
        repository::ReviewRepository,
        services::ReviewQueryService,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct ReviewQueryServiceImpl {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewQueryServiceImpl {
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl ReviewQueryService for ReviewQueryServiceImpl {
    async fn get_by_id(&self, query: GetReviewByIdQuery) -> Result<Option<Review>, DomainError> {
        self.reviews.find_by_id(&query.review_id).await
    }

    async fn get_by_product_id(
        &self,
        query: GetReviewsByProductIdQuery,
    ) -> Result<Vec<Review>, DomainError> {
        self.reviews.find_by_product_id(&query.product_id).await
    }

    async fn get_by_user_id(
        &self,
        query: GetReviewsByUserIdQuery,
    ) -> Result<Vec<Review>, DomainError> {
        self.reviews.find_by_user_id(&query.user_id).await
    }
}
