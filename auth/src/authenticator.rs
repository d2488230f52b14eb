use std::sync::Arc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenKeys;

/// Authentication coordinator combining password verification and token issuance.
///
/// Owns the hashing side of credentials and shares the signing keys with the
/// authorization gate, so tokens issued here verify there.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_keys: Arc<TokenKeys>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_keys` - Signing keys shared with the authorization gate
    /// * `password_hasher` - Hasher configured with the service cost setting
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_keys: Arc<TokenKeys>, password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            token_keys,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against stored credentials.
    ///
    /// Performs exactly one verification per call.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// Unit on match
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(())
    }

    /// Issue an access token for an already authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - User identifier embedded in the token
    ///
    /// # Returns
    /// Signed token string, valid for one hour
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.token_keys.issue(user_id)
    }
}
