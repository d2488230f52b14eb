pub mod claims;
pub mod errors;
pub mod keys;

pub use claims::Claims;
pub use claims::TOKEN_VALIDITY_SECS;
pub use errors::TokenError;
pub use keys::TokenKeys;
