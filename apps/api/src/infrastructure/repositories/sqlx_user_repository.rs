use crate::domain::{
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository, value_objects::UserAddress},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info, instrument};

#[derive(FromRow)]
struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    country: String,
    city: String,
    street: String,
    zip: String,
    favorite_products: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password_hash: r.password_hash,
            address: UserAddress {
                country: r.country,
                city: r.city,
                street: r.street,
                zip: r.zip,
            },
            favorite_products: r.favorite_products,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, \
     country, city, street, zip, favorite_products, created_at, updated_at";

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxUserRepository with connection pool");
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE {} = $1", USER_COLUMNS, column);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("User lookup by {} failed: {}", column, e);
                DomainError::InfrastructureError(e.to_string())
            })?;
        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            "INSERT INTO users (id, first_name, last_name, email, password_hash,
                                country, city, street, zip, favorite_products, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.address.country)
        .bind(&user.address.city)
        .bind(&user.address.street)
        .bind(&user.address.zip)
        .bind(&user.favorite_products)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23505") {
                    return Err(DomainError::Conflict("Email already registered".into()));
                }
            }
            error!("User insert failed: {}", e);
            return Err(DomainError::InfrastructureError(e.to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        self.find_one("id", user_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn exists(&self, user_id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
