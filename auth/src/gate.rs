use std::sync::Arc;

use http::HeaderMap;

use crate::token::Claims;
use crate::token::TokenKeys;

/// Header inspected for the credential when none is configured.
pub const DEFAULT_TOKEN_HEADER: &str = "authorization";

/// Request authorization gate.
///
/// Derives a yes/no decision from request headers: find the configured
/// credential header, take the token after the scheme label, verify it.
/// Stateless and free of I/O, so a single instance serves every request.
pub struct AuthorizationGate {
    keys: Arc<TokenKeys>,
    header_name: String,
}

/// Why a request was denied. Logged, never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Denial {
    MissingCredential,
    MalformedCredential,
    InvalidToken,
}

impl AuthorizationGate {
    /// Create a gate over the given verification keys.
    ///
    /// # Arguments
    /// * `keys` - Verification keys shared with the token issuer
    /// * `header_name` - Name of the header carrying the credential
    pub fn new(keys: Arc<TokenKeys>, header_name: impl Into<String>) -> Self {
        Self {
            keys,
            header_name: header_name.into(),
        }
    }

    /// Name of the header this gate inspects.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Decide whether a request is authorized.
    ///
    /// Clients send the credential as `<scheme> <token>`; the scheme label is
    /// not validated, only the token after it. Every failure collapses to
    /// `false` so callers never branch on why a request was denied; the
    /// reason is logged here instead.
    ///
    /// # Arguments
    /// * `headers` - Request headers
    ///
    /// # Returns
    /// True if the request carries a valid token
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        match self.check(headers) {
            Ok(claims) => {
                tracing::debug!(user_id = claims.id, "Request authorized");
                true
            }
            Err(denial) => {
                tracing::debug!(reason = ?denial, header = %self.header_name, "Request denied");
                false
            }
        }
    }

    fn check(&self, headers: &HeaderMap) -> Result<Claims, Denial> {
        let value = headers
            .get(&self.header_name)
            .ok_or(Denial::MissingCredential)?;

        let value = value.to_str().map_err(|_| Denial::MalformedCredential)?;

        // Header value is "<scheme> <token>"; a bare token without a scheme
        // label has nothing in second position and is rejected.
        let token = value
            .split_whitespace()
            .nth(1)
            .ok_or(Denial::MalformedCredential)?;

        self.keys.verify(token).map_err(|_| Denial::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use http::HeaderValue;

    use super::*;
    use crate::token::TOKEN_VALIDITY_SECS;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn gate() -> (AuthorizationGate, Arc<TokenKeys>) {
        let keys = Arc::new(TokenKeys::new(SECRET));
        (
            AuthorizationGate::new(Arc::clone(&keys), DEFAULT_TOKEN_HEADER),
            keys,
        )
    }

    fn headers_with(name: &'static str, value: String) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(&value).unwrap());
        headers
    }

    #[test]
    fn test_authorize_missing_header() {
        let (gate, _) = gate();
        assert!(!gate.authorize(&HeaderMap::new()));
    }

    #[test]
    fn test_authorize_valid_token_any_scheme() {
        let (gate, keys) = gate();
        let token = keys.issue(42).expect("Failed to issue token");

        // The scheme label is discarded, so both variants pass.
        let bearer = headers_with("authorization", format!("Bearer {}", token));
        assert!(gate.authorize(&bearer));

        let custom = headers_with("authorization", format!("Token {}", token));
        assert!(gate.authorize(&custom));
    }

    #[test]
    fn test_authorize_bare_token_rejected() {
        let (gate, keys) = gate();
        let token = keys.issue(42).expect("Failed to issue token");

        // No scheme label: nothing in second position.
        let headers = headers_with("authorization", token);
        assert!(!gate.authorize(&headers));
    }

    #[test]
    fn test_authorize_garbage_token() {
        let (gate, _) = gate();
        let headers = headers_with("authorization", "Bearer not-a-token".to_string());
        assert!(!gate.authorize(&headers));
    }

    #[test]
    fn test_authorize_expired_token() {
        let (gate, keys) = gate();

        let iat = Utc::now().timestamp() - TOKEN_VALIDITY_SECS;
        let expired = keys
            .encode(&Claims::issued_at(42, iat))
            .expect("Failed to encode token");

        let headers = headers_with("authorization", format!("Bearer {}", expired));
        assert!(!gate.authorize(&headers));
    }

    #[test]
    fn test_authorize_wrong_secret() {
        let (gate, _) = gate();
        let other_keys = TokenKeys::new(b"another_secret_at_least_32_bytes!!");
        let token = other_keys.issue(42).expect("Failed to issue token");

        let headers = headers_with("authorization", format!("Bearer {}", token));
        assert!(!gate.authorize(&headers));
    }

    #[test]
    fn test_authorize_custom_header_name() {
        let keys = Arc::new(TokenKeys::new(SECRET));
        let gate = AuthorizationGate::new(Arc::clone(&keys), "x-access-token");
        let token = keys.issue(42).expect("Failed to issue token");

        let headers = headers_with("x-access-token", format!("Bearer {}", token));
        assert!(gate.authorize(&headers));

        // The default header is no longer consulted.
        let wrong = headers_with("authorization", format!("Bearer {}", token));
        assert!(!gate.authorize(&wrong));
    }

    #[test]
    fn test_authorize_non_utf8_header_value() {
        let (gate, _) = gate();

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_bytes(b"Bearer \xFF\xFE").unwrap(),
        );
        assert!(!gate.authorize(&headers));
    }
}
