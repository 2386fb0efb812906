/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is read
 * first when present), with defaults suitable for local development. Tests
 * build a `ServerConfig` directly through the builder.
 *
 * | Variable       | Default                 |
 * |----------------|-------------------------|
 * | `DATABASE_URL` | `sqlite://calendar.db`  |
 * | `JWT_SECRET`   | development secret      |
 * | `SERVER_HOST`  | `0.0.0.0`               |
 * | `SERVER_PORT`  | `8000`                  |
 * | `BCRYPT_COST`  | `bcrypt::DEFAULT_COST`  |
 */

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://calendar.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Used when `JWT_SECRET` is unset. Never acceptable outside development.
const DEVELOPMENT_SECRET: &str = "calendar-development-secret-change-me";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Self::builder();

        if let Some(url) = env_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        match env_var("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                builder = builder.jwt_secret(DEVELOPMENT_SECRET);
            }
        }

        if let Some(host) = env_var("SERVER_HOST") {
            let host = host
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::invalid("SERVER_HOST", e))?;
            builder = builder.host(host);
        }

        if let Some(port) = env_var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("SERVER_PORT", e))?;
            builder = builder.port(port);
        }

        if let Some(cost) = env_var("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid("BCRYPT_COST", e))?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            ));
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    host: Option<IpAddr>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    ///
    /// The signing secret has no default here; `from_env` supplies the
    /// development fallback explicitly.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let host = match self.host {
            Some(host) => host,
            None => DEFAULT_HOST
                .parse()
                .map_err(|e| ConfigError::invalid("SERVER_HOST", e))?,
        };

        let config = ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            host,
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl ToString) -> Self {
        Self::InvalidValue {
            key,
            message: message.to_string(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
