//! In-memory repositories for tests and local runs without PostgreSQL.
//!
//! Each store keeps its data behind a `std::sync::RwLock`; like and unlike
//! mutate a review and read its count while holding the write lock, which
//! makes them atomic with respect to each other.

use crate::domain::{
    product::repository::ProductRepository,
    review::{entity::Review, repository::ReviewRepository},
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository},
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::InfrastructureError("in-memory store lock poisoned".into())
}

#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<HashMap<String, Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_matching(
        &self,
        predicate: impl Fn(&Review) -> bool,
    ) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().map_err(poisoned)?;
        let mut found: Vec<Review> = reviews.values().filter(|r| predicate(r)).cloned().collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(found)
    }

    fn mutate_likes(
        &self,
        review_id: &str,
        change: impl FnOnce(&mut Review) -> bool,
    ) -> Result<Option<usize>, DomainError> {
        let mut reviews = self.reviews.write().map_err(poisoned)?;
        Ok(reviews.get_mut(review_id).map(|review| {
            change(review);
            review.like_count()
        }))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.write().map_err(poisoned)?;
        if reviews.contains_key(&review.id) {
            return Err(DomainError::Conflict(format!("review {} already exists", review.id)));
        }
        reviews.insert(review.id.clone(), review.clone());
        Ok(())
    }

    async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().map_err(poisoned)?;
        Ok(reviews.get(review_id).cloned())
    }

    async fn find_by_product_id(&self, product_id: &str) -> Result<Vec<Review>, DomainError> {
        self.find_matching(|r| r.product_id == product_id)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Review>, DomainError> {
        self.find_matching(|r| r.user_id == user_id)
    }

    async fn add_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<usize>, DomainError> {
        self.mutate_likes(review_id, |review| review.add_like(user_id))
    }

    async fn remove_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<usize>, DomainError> {
        self.mutate_likes(review_id, |review| review.remove_like(user_id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict("Email already registered".into()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists(&self, user_id: &str) -> Result<bool, DomainError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.contains_key(user_id))
    }
}

/// Product ids known to the catalog. Seeded at startup; the catalog has no
/// write path through this service.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashSet<String>>,
}

impl InMemoryProductRepository {
    pub fn with_products<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: RwLock::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    pub fn register(&self, product_id: impl Into<String>) -> Result<(), DomainError> {
        let mut products = self.products.write().map_err(poisoned)?;
        products.insert(product_id.into());
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn exists(&self, product_id: &str) -> Result<bool, DomainError> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.contains(product_id))
    }
}
