use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id) with a
/// configurable iteration count. Verification reads the parameters back from
/// the stored PHC string, so hashes produced under an older cost setting keep
/// verifying after the setting changes.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a password hasher with the default parameters.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a password hasher with an explicit iteration count.
    ///
    /// Memory and parallelism stay at the algorithm defaults; only the
    /// iteration count (t_cost) is tuned.
    ///
    /// # Arguments
    /// * `cost` - Argon2 iteration count, must be at least 1
    ///
    /// # Returns
    /// PasswordHasher instance with the requested cost
    ///
    /// # Errors
    /// * `InvalidParameters` - The cost is rejected by the algorithm
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_cost_roundtrip() {
        let hasher = PasswordHasher::with_cost(3).expect("Failed to build hasher");
        let hash = hasher.hash("my_secure_password").expect("Failed to hash");

        assert!(hash.contains("t=3"));
        assert!(hasher
            .verify("my_secure_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_cost_change_keeps_old_hashes_valid() {
        let old_hasher = PasswordHasher::with_cost(3).expect("Failed to build hasher");
        let hash = old_hasher.hash("my_secure_password").expect("Failed to hash");

        // A hasher with a different cost still verifies the stored hash.
        let new_hasher = PasswordHasher::new();
        assert!(new_hasher
            .verify("my_secure_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_with_cost_zero_rejected() {
        let result = PasswordHasher::with_cost(0);
        assert!(matches!(result, Err(PasswordError::InvalidParameters(_))));
    }
}
