use crate::{
    domain::{
        shared::errors::DomainError,
        user::{
            commands::CreateUserCommand, entity::User, repository::UserRepository,
            services::UserCommandService,
        },
    },
    infrastructure::security::password::PasswordHasher,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct UserCommandServiceImpl {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserCommandServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl UserCommandService for UserCommandServiceImpl {
    #[instrument(skip(self, command))]
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, DomainError> {
        if self.users.find_by_email(&command.email).await?.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(DomainError::Conflict("Email already registered".into()));
        }

        // bcrypt is CPU bound; keep it off the async workers.
        let hasher = self.hasher.clone();
        let password = command.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .map_err(|e| {
                DomainError::InfrastructureError(format!("Password hashing failed: {}", e))
            })?;

        let user = User::create(command, password_hash);
        self.users.insert(&user).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
