//! Authentication primitives library
//!
//! Provides the credential-handling building blocks for the identity service:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bound bearer token issuance and validation (HS256 JWT)
//!
//! The library holds no persistence state. Tokens are self-contained: once
//! issued, a token with a valid signature is accepted until its expiry
//! instant passes. There is no server-side revocation.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 30);
//! let token = tokens.issue("alice").unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
