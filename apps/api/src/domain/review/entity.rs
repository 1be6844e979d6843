use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::commands::CreateReviewCommand;

/// A product review written by a user.
///
/// Likes are kept as the set of user ids that liked the review rather than
/// as a counter, so repeating a like or an unlike never changes the count
/// twice.
///
/// # Invariants
/// - `liked_by` holds each user id at most once
/// - `like_count()` is always `liked_by.len()`
/// - `rating` lies in `1..=5`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Opaque identifier, generated on creation
    pub id: String,

    /// Product being reviewed
    pub product_id: String,

    /// Author of the review
    pub user_id: String,

    /// Free-form review text
    pub content: String,

    /// Star rating from 1 to 5
    pub rating: i16,

    /// Users that currently like this review
    pub liked_by: BTreeSet<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Builds a fresh review with a new id and no likes.
    pub fn create(command: CreateReviewCommand) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            product_id: command.product_id,
            user_id: command.user_id,
            content: command.content,
            rating: command.rating,
            liked_by: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.contains(user_id)
    }

    /// Records a like from `user_id`. Returns `false` if it was already there.
    pub fn add_like(&mut self, user_id: &str) -> bool {
        let inserted = self.liked_by.insert(user_id.to_string());
        if inserted {
            self.updated_at = Utc::now();
        }
        inserted
    }

    /// Withdraws the like from `user_id`. Returns `false` if there was none.
    pub fn remove_like(&mut self, user_id: &str) -> bool {
        let removed = self.liked_by.remove(user_id);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }
}
