use std::env;

use crate::error::ConfigError;

/// Deployment environment the service runs in.
///
/// Selects between human-readable and structured logging, and gates
/// production-only behavior such as HSTS headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Invalid {
                name: "APP_ENV",
                value: other.to_string(),
            }),
        }
    }
}

/// Service configuration, read from environment variables.
///
/// Every variable has a default; the service needs no secrets.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub env: Environment,
    /// Origins allowed by CORS. Empty means a permissive layer,
    /// which is only intended for local development.
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Read the configuration from the process environment.
    ///
    /// Recognized variables: `HOST` (default `0.0.0.0`), `PORT` (default
    /// `3000`), `APP_ENV` (`development` or `production`, default
    /// development) and `ALLOWED_ORIGINS` (comma-separated list).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        let env = match env::var("APP_ENV") {
            Ok(raw) => Environment::parse(&raw)?,
            Err(_) => Environment::Development,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            env,
            allowed_origins,
        })
    }
}
