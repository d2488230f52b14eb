use chrono::Utc;
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

/// Signing and verification keys for access tokens.
///
/// Holds the HS256 key pair derived from the service secret, created once at
/// startup. Issuance and verification are stateless; nothing is remembered
/// between calls.
pub struct TokenKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenKeys {
    /// Create token keys from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// TokenKeys instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a fresh token for a user.
    ///
    /// Each call stamps the current time, so two tokens issued for the same
    /// user at different seconds differ.
    ///
    /// # Arguments
    /// * `user_id` - User identifier embedded in the claims
    ///
    /// # Returns
    /// Signed token string, valid for one hour
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.encode(&Claims::for_user(user_id))
    }

    /// Sign an explicit set of claims.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// A pure function of the token, the secret, and the current time.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Malformed` - Token cannot be parsed
    /// * `Expired` - Current time has reached the expiration timestamp
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        // The library's own exp check applies 60s leeway and keeps a token
        // alive at the exact expiration second. Expiry is checked against the
        // claims below instead, so `now >= exp` already fails.
        validation.validate_exp = false;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Check whether a token is currently valid.
    ///
    /// Collapses every verification failure to `false`. Callers that need the
    /// failure reason use [`verify`](Self::verify) instead.
    ///
    /// # Arguments
    /// * `token` - Token string to check
    ///
    /// # Returns
    /// True if the token verifies and is not expired
    pub fn is_authenticated(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::super::claims::TOKEN_VALIDITY_SECS;
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let keys = TokenKeys::new(SECRET);

        let token = keys.issue(42).expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = keys.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.exp - claims.iat, TOKEN_VALIDITY_SECS);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let keys = TokenKeys::new(SECRET);
        let other_keys = TokenKeys::new(b"another_secret_at_least_32_bytes!!");

        let token = keys.issue(42).expect("Failed to issue token");

        let result = other_keys.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_verify_garbage_token() {
        let keys = TokenKeys::new(SECRET);

        let result = keys.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue(42).expect("Failed to issue token");

        // Flip the last signature character.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(keys.verify(&tampered).is_err());
        assert!(!keys.is_authenticated(&tampered));
    }

    #[test]
    fn test_verify_expired_token() {
        let keys = TokenKeys::new(SECRET);

        // Issued exactly one validity window ago: exp == now, already invalid.
        let iat = Utc::now().timestamp() - TOKEN_VALIDITY_SECS;
        let token = keys
            .encode(&Claims::issued_at(7, iat))
            .expect("Failed to encode token");

        let result = keys.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_token_near_expiry_still_valid() {
        let keys = TokenKeys::new(SECRET);

        // Five seconds of validity left.
        let iat = Utc::now().timestamp() - TOKEN_VALIDITY_SECS + 5;
        let token = keys
            .encode(&Claims::issued_at(7, iat))
            .expect("Failed to encode token");

        let claims = keys.verify(&token).expect("Token should still verify");
        assert_eq!(claims.id, 7);
    }

    #[test]
    fn test_is_authenticated_collapses_failures() {
        let keys = TokenKeys::new(SECRET);

        let valid = keys.issue(42).expect("Failed to issue token");
        assert!(keys.is_authenticated(&valid));

        assert!(!keys.is_authenticated("not-even-a-token"));

        let iat = Utc::now().timestamp() - TOKEN_VALIDITY_SECS;
        let expired = keys
            .encode(&Claims::issued_at(42, iat))
            .expect("Failed to encode token");
        assert!(!keys.is_authenticated(&expired));
    }
}
