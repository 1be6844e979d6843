#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReviewByIdQuery {
    pub review_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReviewsByProductIdQuery {
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReviewsByUserIdQuery {
    pub user_id: String,
}

impl GetReviewByIdQuery {
    pub fn new(review_id: impl Into<String>) -> Self {
        Self {
            review_id: review_id.into(),
        }
    }
}

impl GetReviewsByProductIdQuery {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl GetReviewsByUserIdQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
