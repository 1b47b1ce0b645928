//! Error handling for the settings page
//!
//! All errors are serializable for IPC communication, so a failed command
//! reaches the page as `{ "type": ..., "message": ... }`.

use thiserror::Error;
use serde::Serialize;

/// Settings operation errors
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum SettingsError {
    /// Host service failure (config file or theme directory I/O)
    #[error("Host service error: {0}")]
    Host(String),

    /// Stored config is not valid JSON or could not be serialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// Control value rejected before anything was written
    #[error("Invalid value: {0}")]
    Validation(String),

    /// Change event named a field the config does not have
    #[error("Unknown config field: {0}")]
    UnknownField(String),

    /// Theme lookup failed
    #[error("Theme error: {0}")]
    Theme(String),

    /// Theme download failed
    #[error("Network error: {0}")]
    Network(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Host(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for SettingsError {
    fn from(err: reqwest::Error) -> Self {
        SettingsError::Network(err.to_string())
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
