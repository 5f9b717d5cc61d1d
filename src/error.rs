use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the dashboard
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(caldesk::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(caldesk::config))]
    Config(String),

    #[error("Calendar API error: {0}")]
    #[diagnostic(code(caldesk::calendar_api))]
    CalendarApi(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(caldesk::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(caldesk::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(caldesk::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(caldesk::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DashResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create component errors
#[allow(dead_code)]
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create calendar API errors
pub fn calendar_api_error(message: &str) -> Error {
    Error::CalendarApi(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
