use validator::{Validate, ValidationError};

use super::value_objects::UserAddress;
use crate::domain::shared::errors::DomainError;

/// Request to open a user account.
///
/// Holds the clear-text password until the command service hashes it, so its
/// `Debug` output masks the password.
#[derive(Clone, Validate)]
pub struct CreateUserCommand {
    #[validate(length(min = 1, max = 100, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "password must be at least 8 characters"),
        custom(function = "fits_bcrypt_input")
    )]
    pub password: String,
    #[validate(nested)]
    pub address: UserAddress,
}

impl CreateUserCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        country: String,
        city: String,
        street: String,
        zip: String,
    ) -> Result<Self, DomainError> {
        let command = Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password,
            address: UserAddress::new(country, city, street, zip)?,
        };
        command.validate()?;
        Ok(command)
    }
}

/// bcrypt only reads the first 72 bytes of its input.
const MAX_PASSWORD_BYTES: usize = 72;

fn fits_bcrypt_input(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("password must be at most 72 bytes".into()));
    }
    Ok(())
}

impl std::fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("address", &self.address)
            .finish()
    }
}
