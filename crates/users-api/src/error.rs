use thiserror::Error;

/// Errors raised while reading the service configuration from the
/// environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
