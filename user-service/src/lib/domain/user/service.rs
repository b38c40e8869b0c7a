use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::policy::EmptyListPolicy;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for account operations.
///
/// Stateless over the injected repository; hashing and token issuance go
/// through the shared `Authenticator`.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    empty_list_policy: EmptyListPolicy,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token signing
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            empty_list_policy: EmptyListPolicy::default(),
        }
    }

    pub fn with_empty_list_policy(mut self, policy: EmptyListPolicy) -> Self {
        self.empty_list_policy = policy;
        self
    }

    async fn find_existing(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    fn issue_token_for(&self, user: &User) -> Result<String, UserError> {
        Ok(self.authenticator.issue_token(user.id, user.role.as_str())?)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())?;

        let new_user = NewUser {
            username: command.username,
            password_hash,
            name: command.name,
            role: command.role,
            created_at: Utc::now(),
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(user)
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))?;

        self.authenticator
            .verify_password(password.expose(), &user.password_hash)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => UserError::Password(err),
                auth::AuthenticationError::JwtError(err) => UserError::Token(err),
            })?;

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.find_existing(id).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        if command.is_empty() {
            return Err(UserError::EmptyUpdate);
        }

        let mut user = self.find_existing(id).await?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.authenticator.hash_password(new_password.expose())?;
        }

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let users = self.repository.list_all().await?;
        self.empty_list_policy.apply(users)
    }

    async fn assign_token(&self, id: &UserId, token: String) -> Result<(), UserError> {
        let mut user = self.find_existing(id).await?;
        user.token = Some(token);
        self.repository.update(user).await?;

        Ok(())
    }

    async fn login(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<LoginOutcome, UserError> {
        let mut user = self.authenticate_user(username, password).await?;

        let token = self.issue_token_for(&user)?;
        user.token = Some(token.clone());
        let user = self.repository.update(user).await?;
        tracing::debug!(user_id = %user.id, "Token issued");

        Ok(LoginOutcome { user, token })
    }

    async fn refresh_token(&self, id: &UserId, presented_token: &str) -> Result<String, UserError> {
        let mut user = self.find_existing(id).await?;

        if !user.holds_token(presented_token) {
            tracing::warn!(user_id = %id, "Refresh attempted with a superseded token");
            return Err(UserError::StaleToken);
        }

        let token = self.issue_token_for(&user)?;
        user.token = Some(token.clone());
        self.repository.update(user).await?;
        tracing::debug!(user_id = %id, "Token refreshed");

        Ok(token)
    }
}
