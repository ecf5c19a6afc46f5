use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed, time-bound bearer tokens.
///
/// The secret, the signing algorithm (HS256), and the validity window are
/// fixed at construction. Validation uses zero clock leeway, so a token is
/// rejected from the instant its `exp` timestamp passes.
///
/// There is no revocation: any token with a valid signature and an unexpired
/// `exp` claim is accepted.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret (at least 32 bytes for HS256)
    /// * `validity_minutes` - Lifetime of issued tokens
    ///
    /// # Security Notes
    /// - Store the secret in environment variables or a vault, never in code
    /// - Rotating the secret invalidates every outstanding token
    pub fn new(secret: &[u8], validity_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity: Duration::minutes(validity_minutes),
        }
    }

    /// Issue a token for a subject, valid for the configured duration.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts (username)
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `SigningFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, self.validity);
        self.encode(&claims)
    }

    /// Encode an explicit claim set.
    ///
    /// `issue` is the normal entry point; this exists for callers that need
    /// full control over the timestamps.
    ///
    /// # Arguments
    /// * `claims` - Claim set to sign
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `SigningFailed` - Token signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Returns
    /// Decoded claim set
    ///
    /// # Errors
    /// * `Expired` - Signature verified but the current time is at or past `exp`
    /// * `Invalid` - Signature does not verify or the structure is malformed
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
