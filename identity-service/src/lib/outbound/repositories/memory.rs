use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// In-memory user repository.
///
/// Enforces the same username/email uniqueness as the Postgres adapter,
/// with the check and the insert under one lock. Backs the hermetic
/// integration tests; not intended for production use.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, AuthError> {
        self.users
            .lock()
            .map_err(|_| AuthError::Database("user store lock poisoned".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.locked()?;

        // Same precedence as the unique-index checks: username first.
        if users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::DuplicateUsername(
                user.username.as_str().to_string(),
            ));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail(user.email.as_str().to_string()));
        }

        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let users = self.locked()?;
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let users = self.locked()?;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}
