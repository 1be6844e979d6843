use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{
    application::reviews::dto::required,
    domain::{
        shared::errors::DomainError,
        user::{commands::CreateUserCommand, entity::User, value_objects::UserAddress},
    },
};

/// Body of `POST /api/v1/users`.
#[derive(Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
}

impl CreateUserRequest {
    pub fn into_command(self) -> Result<CreateUserCommand, DomainError> {
        CreateUserCommand::new(
            required(self.first_name, "firstName")?,
            required(self.last_name, "lastName")?,
            required(self.email, "email")?,
            required(self.password, "password")?,
            required(self.country, "country")?,
            required(self.city, "city")?,
            required(self.street, "street")?,
            required(self.zip, "zip")?,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserAddressResponse {
    pub country: String,
    pub city: String,
    pub street: String,
    pub zip: String,
}

/// Public view of a user. Never carries the password or its hash.
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: UserAddressResponse,
    pub favorite_products: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserAddress> for UserAddressResponse {
    fn from(address: UserAddress) -> Self {
        Self {
            country: address.country,
            city: address.city,
            street: address.street,
            zip: address.zip,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            address: user.address.into(),
            favorite_products: user.favorite_products,
            created_at: user.created_at,
        }
    }
}
