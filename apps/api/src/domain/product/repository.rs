use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Read-only view of the product catalog, which is owned elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists(&self, product_id: &str) -> Result<bool, DomainError>;
}
