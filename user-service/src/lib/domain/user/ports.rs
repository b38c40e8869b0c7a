use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Validated username, password, display name and role
    ///
    /// # Returns
    /// Created account with a hashed password and no token
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Verify a username/password pair.
    ///
    /// Does not issue or store a token.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No account with this username
    /// * `InvalidCredentials` - Password does not match
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Update an account with optional fields.
    ///
    /// # Errors
    /// * `EmptyUpdate` - Command changes nothing
    /// * `NotFound` - Account does not exist
    /// * `UsernameAlreadyExists` - New username belongs to another account
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Permanently delete an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist (including a second delete)
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;

    /// List all accounts ordered by identifier.
    ///
    /// # Errors
    /// * `EmptyCollection` - No accounts, when the empty list policy rejects
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Store `token` as the account's current token.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn assign_token(&self, id: &UserId, token: String) -> Result<(), UserError>;

    /// Authenticate, issue a token for the account's role and store it.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No account with this username
    /// * `InvalidCredentials` - Password does not match
    async fn login(&self, username: &Username, password: &Password)
        -> Result<LoginOutcome, UserError>;

    /// Exchange the account's current token for a new one.
    ///
    /// # Arguments
    /// * `id` - Subject of the presented token
    /// * `presented_token` - Raw token the caller authenticated with
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `StaleToken` - Presented token is not the stored one
    async fn refresh_token(&self, id: &UserId, presented_token: &str)
        -> Result<String, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new account and assign its identifier.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve account by identifier.
    ///
    /// # Returns
    /// Optional account (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve account by username.
    ///
    /// # Returns
    /// Optional account (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all accounts ordered by identifier.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Overwrite the stored fields of an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `UsernameAlreadyExists` - New username belongs to another account
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove account from storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
