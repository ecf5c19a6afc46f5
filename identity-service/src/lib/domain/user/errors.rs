use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all authentication and registration operations.
///
/// Registration conflicts are field-specific so the caller can correct the
/// offending field. Authentication and token failures stay generic:
/// `AuthenticationFailed` covers both an unknown username and a wrong
/// password, so callers cannot enumerate accounts.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credential input: {0}")]
    InvalidCredentialInput(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Invalid username or password")]
    AuthenticationFailed,

    #[error("Token is invalid: {0}")]
    TokenInvalid(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UsernameError> for AuthError {
    fn from(err: UsernameError) -> Self {
        AuthError::InvalidCredentialInput(err.to_string())
    }
}

impl From<EmailError> for AuthError {
    fn from(err: EmailError) -> Self {
        AuthError::InvalidCredentialInput(err.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid(msg) => AuthError::TokenInvalid(msg),
            TokenError::SigningFailed(msg) => AuthError::Internal(msg),
        }
    }
}
