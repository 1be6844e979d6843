use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{commands::CreateUserCommand, value_objects::UserAddress};

/// A customer account.
///
/// Reviews only reference users by `id`. `password_hash` is a bcrypt hash
/// and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Lower-cased, unique across accounts
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub address: UserAddress,
    /// Product ids the user marked as favourites
    pub favorite_products: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn create(command: CreateUserCommand, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            address: command.address,
            favorite_products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
