use crate::domain::{
    product::repository::ProductRepository,
    review::{
        commands::{AddLikeToReviewCommand, CreateReviewCommand, RemoveLikeFromReviewCommand},
        entity::Review,
        repository::ReviewRepository,
        services::ReviewCommandService,
    },
    shared::errors::DomainError,
    user::repository::UserRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Review mutations backed by repository ports.
///
/// Like and unlike delegate the set change to the repository so the
/// read-modify-write happens atomically in storage.
pub struct ReviewCommandServiceImpl {
    reviews: Arc<dyn ReviewRepository>,
    products: Arc<dyn ProductRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReviewCommandServiceImpl {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reviews,
            products,
            users,
        }
    }
}

#[async_trait]
impl ReviewCommandService for ReviewCommandServiceImpl {
    #[instrument(skip(self, command), fields(
        product_id = %command.product_id,
        user_id = %command.user_id
    ))]
    async fn create_review(&self, command: CreateReviewCommand) -> Result<Review, DomainError> {
        let (product_exists, author_exists) = futures_util::try_join!(
            self.products.exists(&command.product_id),
            self.users.exists(&command.user_id),
        )?;

        if !product_exists {
            warn!("Review rejected: unknown product");
            return Err(DomainError::ValidationError(format!(
                "product {} does not exist",
                command.product_id
            )));
        }
        if !author_exists {
            warn!("Review rejected: unknown user");
            return Err(DomainError::ValidationError(format!(
                "user {} does not exist",
                command.user_id
            )));
        }

        let review = Review::create(command);
        self.reviews.insert(&review).await?;
        info!(review_id = %review.id, "Review created");
        Ok(review)
    }

    #[instrument(skip(self, command), fields(review_id = %command.review_id, user_id = %command.user_id))]
    async fn add_like(&self, command: AddLikeToReviewCommand) -> Result<usize, DomainError> {
        let count = self
            .reviews
            .add_like(&command.review_id, &command.user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("review {}", command.review_id)))?;
        debug!(like_count = count, "Like recorded");
        Ok(count)
    }

    #[instrument(skip(self, command), fields(review_id = %command.review_id, user_id = %command.user_id))]
    async fn remove_like(
        &self,
        command: RemoveLikeFromReviewCommand,
    ) -> Result<usize, DomainError> {
        let count = self
            .reviews
            .remove_like(&command.review_id, &command.user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("review {}", command.review_id)))?;
        debug!(like_count = count, "Like withdrawn");
        Ok(count)
    }
}
