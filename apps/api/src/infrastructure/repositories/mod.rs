pub mod in_memory;
pub mod sqlx_product_repository;
pub mod sqlx_review_repository;
pub mod sqlx_user_repository;
