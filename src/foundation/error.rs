/// Convenience result type used across Showreel.
pub type ShowreelResult<T> = Result<T, ShowreelError>;

/// Top-level error taxonomy used by loader, animation, and config APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShowreelError {
    /// Transport or body-parse failure while talking to the projects API.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The projects API answered with a non-success status.
    #[error("server error (status {status})")]
    Server {
        /// HTTP status code returned by the server.
        status: u16,
        /// Message carried in the error body, if any.
        message: Option<String>,
    },

    /// Invalid user-provided data (tween parameters, widths, records).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShowreelError {
    /// Build a [`ShowreelError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`ShowreelError::Server`] value.
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Build a [`ShowreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShowreelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ShowreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
