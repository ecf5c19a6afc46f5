use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an issued bearer token.
///
/// The subject is the username the token was issued for. Validity is
/// `[iat, exp)`; nothing else is encoded, and nothing is stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username the token was issued for)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, valid from now for `validity`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `validity` - Lifetime; `exp` is exactly `iat + validity`
    pub fn new(subject: impl Into<String>, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_issued_at_plus_validity() {
        let claims = Claims::new("alice", Duration::minutes(30));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_negative_validity_yields_past_expiry() {
        let claims = Claims::new("alice", Duration::minutes(-5));
        assert!(claims.exp < claims.iat);
    }
}
