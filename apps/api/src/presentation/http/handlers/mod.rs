pub mod docs;
pub mod health;
pub mod reviews;
pub mod users;
