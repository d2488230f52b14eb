use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for crm-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Authentication configuration.
///
/// `secret` has no default on purpose: the service refuses to start without
/// an explicit signing secret.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,

    /// Request header carrying the access token.
    #[serde(default = "default_token_header")]
    pub token_header: String,

    /// Argon2 iteration count used when hashing new passwords.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

fn default_token_header() -> String {
    auth::DEFAULT_TOKEN_HEADER.to_string()
}

fn default_hash_cost() -> u32 {
    2
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Returns
    /// Loaded configuration
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid,
    /// in particular when the token signing secret is absent or empty.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.auth.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.secret must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}
