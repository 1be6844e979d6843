use crate::domain::{
    review::{entity::Review, repository::ReviewRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument};

#[derive(FromRow)]
struct ReviewRow {
    id: String,
    product_id: String,
    user_id: String,
    content: String,
    rating: i16,
    liked_by: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id,
            product_id: r.product_id,
            user_id: r.user_id,
            content: r.content,
            rating: r.rating,
            liked_by: r.liked_by.into_iter().collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const REVIEW_COLUMNS: &str =
    "id, product_id, user_id, content, rating, liked_by, created_at, updated_at";

/// PostgreSQL-backed review store.
///
/// Likers live in the `reviews.liked_by` `TEXT[]` column. Like and unlike
/// are single `UPDATE ... RETURNING` statements, so the row lock taken by
/// the update serializes concurrent mutations of the same review.
pub struct SqlxReviewRepository {
    pub pool: PgPool,
}

impl SqlxReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxReviewRepository with connection pool");
        Self { pool }
    }

    async fn find_where(&self, column: &str, value: &str) -> Result<Vec<Review>, DomainError> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE {} = $1 ORDER BY created_at DESC, id DESC",
            REVIEW_COLUMNS, column
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Review listing by {} failed: {}", column, e);
                DomainError::InfrastructureError(e.to_string())
            })?;
        Ok(rows.into_iter().map(Review::from).collect())
    }
}

fn count_from(cardinality: Option<i32>) -> Option<usize> {
    cardinality.map(|n| n.max(0) as usize)
}

#[async_trait]
impl ReviewRepository for SqlxReviewRepository {
    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn insert(&self, review: &Review) -> Result<(), DomainError> {
        let liked_by: Vec<String> = review.liked_by.iter().cloned().collect();
        sqlx::query(
            "INSERT INTO reviews (id, product_id, user_id, content, rating, liked_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&review.id)
        .bind(&review.product_id)
        .bind(&review.user_id)
        .bind(&review.content)
        .bind(review.rating)
        .bind(&liked_by)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Review insert failed: {}", e);
            DomainError::InfrastructureError(e.to_string())
        })?;
        debug!("Review row inserted");
        Ok(())
    }

    async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, DomainError> {
        let sql = format!("SELECT {} FROM reviews WHERE id = $1", REVIEW_COLUMNS);
        let row = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(Review::from))
    }

    async fn find_by_product_id(&self, product_id: &str) -> Result<Vec<Review>, DomainError> {
        self.find_where("product_id", product_id).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Review>, DomainError> {
        self.find_where("user_id", user_id).await
    }

    #[instrument(skip(self))]
    async fn add_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<usize>, DomainError> {
        let count = sqlx::query_scalar::<_, i32>(
            "UPDATE reviews
             SET liked_by = CASE WHEN $2 = ANY(liked_by) THEN liked_by
                                 ELSE array_append(liked_by, $2) END,
                 updated_at = CASE WHEN $2 = ANY(liked_by) THEN updated_at ELSE NOW() END
             WHERE id = $1
             RETURNING cardinality(liked_by)",
        )
        .bind(review_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Like update failed: {}", e);
            DomainError::InfrastructureError(e.to_string())
        })?;
        Ok(count_from(count))
    }

    #[instrument(skip(self))]
    async fn remove_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<usize>, DomainError> {
        let count = sqlx::query_scalar::<_, i32>(
            "UPDATE reviews
             SET liked_by = array_remove(liked_by, $2),
                 updated_at = CASE WHEN $2 = ANY(liked_by) THEN NOW() ELSE updated_at END
             WHERE id = $1
             RETURNING cardinality(liked_by)",
        )
        .bind(review_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Unlike update failed: {}", e);
            DomainError::InfrastructureError(e.to_string())
        })?;
        Ok(count_from(count))
    }
}
