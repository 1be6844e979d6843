use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domain::{
    review::{commands::CreateReviewCommand, entity::Review},
    shared::errors::DomainError,
};

/// Body of `POST /api/v1/reviews`.
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CreateReviewRequest {
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
}

impl CreateReviewRequest {
    pub fn into_command(self) -> Result<CreateReviewCommand, DomainError> {
        CreateReviewCommand::new(
            required(self.product_id, "productId")?,
            required(self.user_id, "userId")?,
            required(self.content, "content")?,
            self.rating
                .ok_or_else(|| DomainError::ValidationError("rating is required".into()))?,
        )
    }
}

/// Body of the like and unlike endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ModifyLikeRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LikesResponse {
    pub review_id: String,
    pub like_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewResponse {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub content: String,
    pub rating: i16,
    pub liked_by: Vec<String>,
    pub like_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        let like_count = review.like_count();
        Self {
            id: review.id,
            product_id: review.product_id,
            user_id: review.user_id,
            content: review.content,
            rating: review.rating,
            liked_by: review.liked_by.into_iter().collect(),
            like_count,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::ValidationError(format!("{} is required", field)))
}
