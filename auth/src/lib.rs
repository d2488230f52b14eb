//! Authentication utilities library
//!
//! Provides the authentication infrastructure the CRM service composes at
//! startup:
//! - Password hashing (Argon2id)
//! - JWT token issuance and verification with a fixed one hour validity
//! - Header-based request authorization
//!
//! The service keeps user lookup and persistence on its side; this crate
//! stays free of HTTP framework and database concerns so it can be tested in
//! isolation.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenKeys;
//!
//! let keys = TokenKeys::new(b"secret_key_at_least_32_bytes_long!");
//! let token = keys.issue(42).unwrap();
//! let claims = keys.verify(&token).unwrap();
//! assert_eq!(claims.id, 42);
//! ```
//!
//! ## Authorizing a Request
//! ```
//! use std::sync::Arc;
//!
//! use auth::AuthorizationGate;
//! use auth::TokenKeys;
//! use http::HeaderMap;
//!
//! let keys = Arc::new(TokenKeys::new(b"secret_key_at_least_32_bytes_long!"));
//! let token = keys.issue(42).unwrap();
//! let gate = AuthorizationGate::new(keys, "authorization");
//!
//! let mut headers = HeaderMap::new();
//! let value = format!("Token {}", token);
//! headers.insert("authorization", value.parse().unwrap());
//! assert!(gate.authorize(&headers));
//! ```

pub mod authenticator;
pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use gate::AuthorizationGate;
pub use gate::DEFAULT_TOKEN_HEADER;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenKeys;
pub use token::TOKEN_VALIDITY_SECS;
