// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Service(ServiceError),
}

/// Specific error types for enhancement service failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Network/transport failure (backend unreachable, connection reset, etc.)
    Transport(String),

    /// Backend answered with a non-2xx HTTP status
    Status(u16),

    /// Backend answered 2xx but the body could not be understood
    /// (unparseable JSON, missing fields, undecodable payload)
    MalformedResponse(String),

    /// The enhanced image payload decoded but is not a valid image
    InvalidImage(String),
}

impl ServiceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ServiceError::Transport(_) => "error-service-transport",
            ServiceError::Status(_) => "error-service-status",
            ServiceError::MalformedResponse(_) => "error-service-malformed",
            ServiceError::InvalidImage(_) => "error-service-invalid-image",
        }
    }

    /// Technical detail string for the notification body, if any.
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Transport(msg)
            | ServiceError::MalformedResponse(msg)
            | ServiceError::InvalidImage(msg) => msg.clone(),
            ServiceError::Status(code) => code.to_string(),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ServiceError::Status(code) => write!(f, "Service returned HTTP status {}", code),
            ServiceError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            ServiceError::InvalidImage(msg) => write!(f, "Invalid enhanced image: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Service(e) => write!(f, "Service Error: {}", e),
        }
    }
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        Error::Service(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
