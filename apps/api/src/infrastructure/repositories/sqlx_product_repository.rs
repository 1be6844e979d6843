use crate::domain::{product::repository::ProductRepository, shared::errors::DomainError};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

/// Looks products up in the catalog's `products` table.
pub struct SqlxProductRepository {
    pub pool: PgPool,
}

impl SqlxProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts catalog ids that are not present yet. Returns how many were added.
    pub async fn register_all(&self, product_ids: &[String]) -> Result<u64, DomainError> {
        if product_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"INSERT INTO products (id, name)
               SELECT id, id FROM UNNEST($1::TEXT[]) AS seed(id)
               ON CONFLICT (id) DO NOTHING"#,
        )
        .bind(product_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Product seeding failed: {}", e);
            DomainError::InfrastructureError(e.to_string())
        })?;

        info!(
            requested = product_ids.len(),
            inserted = result.rows_affected(),
            "Seeded catalog products"
        );
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepository {
    async fn exists(&self, product_id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)"#,
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
