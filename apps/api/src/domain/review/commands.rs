use validator::Validate;

use crate::domain::shared::errors::DomainError;

/// Request to write a new review. Built only through [`CreateReviewCommand::new`].
#[derive(Debug, Clone, Validate, PartialEq)]
pub struct CreateReviewCommand {
    #[validate(length(min = 1, max = 128, message = "productId is required"))]
    pub product_id: String,
    #[validate(length(min = 1, max = 128, message = "userId is required"))]
    pub user_id: String,
    #[validate(length(min = 1, max = 2000, message = "content must be 1 to 2000 characters"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i16,
}

impl CreateReviewCommand {
    pub fn new(
        product_id: String,
        user_id: String,
        content: String,
        rating: i16,
    ) -> Result<Self, DomainError> {
        let command = Self {
            product_id: product_id.trim().to_string(),
            user_id: user_id.trim().to_string(),
            content: content.trim().to_string(),
            rating,
        };
        command.validate()?;
        Ok(command)
    }
}

/// Adds `user_id` to the likers of `review_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLikeToReviewCommand {
    pub review_id: String,
    pub user_id: String,
}

impl AddLikeToReviewCommand {
    pub fn new(review_id: String, user_id: String) -> Result<Self, DomainError> {
        let (review_id, user_id) = like_target(review_id, user_id)?;
        Ok(Self { review_id, user_id })
    }
}

/// Removes `user_id` from the likers of `review_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLikeFromReviewCommand {
    pub review_id: String,
    pub user_id: String,
}

impl RemoveLikeFromReviewCommand {
    pub fn new(review_id: String, user_id: String) -> Result<Self, DomainError> {
        let (review_id, user_id) = like_target(review_id, user_id)?;
        Ok(Self { review_id, user_id })
    }
}

fn like_target(review_id: String, user_id: String) -> Result<(String, String), DomainError> {
    let review_id = review_id.trim();
    let user_id = user_id.trim();
    if review_id.is_empty() {
        return Err(DomainError::ValidationError("reviewId is required".into()));
    }
    if user_id.is_empty() {
        return Err(DomainError::ValidationError("userId is required".into()));
    }
    Ok((review_id.to_string(), user_id.to_string()))
}
