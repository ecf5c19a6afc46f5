use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for the authentication facade.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `InvalidCredentialInput` - Empty password reached the core
    /// * `DuplicateUsername` - Username is already taken
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Persistence operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Check a credential pair against the stored hash.
    ///
    /// An unknown username and a wrong password both yield `None`; the
    /// returned value never distinguishes the two.
    ///
    /// # Arguments
    /// * `username` - Presented username
    /// * `password` - Presented plaintext password
    ///
    /// # Returns
    /// The matching user, or `None`
    ///
    /// # Errors
    /// * `Database` - Persistence operation failed
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError>;

    /// Verify credentials and issue a bearer token for the username.
    ///
    /// # Arguments
    /// * `username` - Presented username
    /// * `password` - Presented plaintext password
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown username or wrong password
    /// * `Database` - Persistence operation failed
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Resolve a bearer token back to the user it was issued for.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Returns
    /// The user named by the token's subject
    ///
    /// # Errors
    /// * `TokenInvalid` - Signature does not verify or structure is malformed
    /// * `TokenExpired` - Token validity window has lapsed
    /// * `AuthenticationFailed` - Subject no longer resolves to a live user
    /// * `Database` - Persistence operation failed
    async fn resolve_identity(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the user entity.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// The store enforces unique indexes on username and email; a violated
    /// index surfaces as the matching duplicate error, exactly as if the
    /// conflict had been found by a lookup.
    ///
    /// # Arguments
    /// * `user` - User entity to persist
    ///
    /// # Returns
    /// Persisted user entity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Persistence operation failed
    async fn insert(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by username.
    ///
    /// # Errors
    /// * `Database` - Persistence operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by normalized email address.
    ///
    /// # Errors
    /// * `Database` - Persistence operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;
}
