use std::io;

use thiserror::Error;

/// Library-wide error type for siteup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// siteup.toml could not be parsed.
    #[error("Malformed siteup.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Domain name failed FQDN validation.
    #[error("Invalid domain '{value}': {reason}")]
    InvalidDomain { value: String, reason: String },

    /// Email address failed syntax validation.
    #[error("Invalid email address '{value}': {reason}")]
    InvalidEmail { value: String, reason: String },

    /// Backend URL failed validation.
    #[error("Invalid proxy target '{value}': {reason}")]
    InvalidProxyTarget { value: String, reason: String },

    /// A named template file is missing from the templates directory.
    #[error("Template '{name}' not found at {path} (run 'siteup init' to scaffold the defaults)")]
    TemplateNotFound { name: String, path: String },

    /// An external command could not be launched or exited non-zero.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// The operator interrupted an interactive prompt.
    #[error("Aborted by operator")]
    Aborted,
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
