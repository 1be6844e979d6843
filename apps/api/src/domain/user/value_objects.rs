use serde::{Deserialize, Serialize};
use validator::Validate;

/// Postal address attached to a user account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct UserAddress {
    #[validate(length(min = 1, max = 64, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, max = 128, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 256, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, max = 16, message = "zip is required"))]
    pub zip: String,
}

impl UserAddress {
    pub fn new(
        country: String,
        city: String,
        street: String,
        zip: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let address = Self {
            country: country.trim().to_string(),
            city: city.trim().to_string(),
            street: street.trim().to_string(),
            zip: zip.trim().to_string(),
        };
        address.validate()?;
        Ok(address)
    }
}
