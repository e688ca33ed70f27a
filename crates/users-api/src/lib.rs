//! HTTP API for the user directory service.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod tracing;
pub mod user;

pub use config::{ApiConfig, Environment};
