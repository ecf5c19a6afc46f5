use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Authentication facade.
///
/// Orchestrates registration (hash, uniqueness-checked insert), login
/// (credential check, token issuance), and identity resolution (token
/// validation, store lookup). Holds no per-request state; every call is a
/// single request/response against the shared repository.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    tokens: TokenService,
    password_hasher: PasswordHasher,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `tokens` - Configured token issuer/validator
    pub fn new(repository: Arc<R>, tokens: TokenService) -> Self {
        Self {
            repository,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        if command.password.is_empty() {
            return Err(AuthError::InvalidCredentialInput(
                "Password must not be empty".to_string(),
            ));
        }

        // Username is checked before email, so a double conflict reports
        // the username. The unique indexes remain the authority: the insert
        // below translates constraint violations from registrations that
        // race past these lookups.
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUsername(
                command.username.as_str().to_string(),
            ));
        }

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateEmail(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.insert(user).await?;

        tracing::info!(user_id = %created.id, username = %created.username, "User registered");

        Ok(created)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => return Ok(None),
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            return Ok(None);
        };

        if self.password_hasher.verify(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .authenticate(username, password)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let token = self.tokens.issue(user.username.as_str())?;

        Ok(token)
    }

    async fn resolve_identity(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.tokens.validate(token)?;

        let username =
            Username::new(claims.sub).map_err(|_| AuthError::AuthenticationFailed)?;

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::AuthenticationFailed)
    }
}
