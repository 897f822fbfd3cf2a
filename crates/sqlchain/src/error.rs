//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for sqlchain operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for fragment building and rendering.
///
/// Every builder validates before it mutates, so a call that returns an
/// error leaves the builder exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Empty text, empty column/operator, empty nested builder or an
    /// unrepresentable value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A call made in the wrong order, or a render over an incomplete builder.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Render configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        let err = Self::InvalidArgument(message.into());
        err.trace();
        err
    }

    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        let err = Self::InvalidState(message.into());
        err.trace();
        err
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an invalid state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    #[cfg(feature = "tracing")]
    fn trace(&self) {
        tracing::trace!(target: "sqlchain.render", error = %self, "rejected builder call");
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self) {}
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
