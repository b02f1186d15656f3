/// Convenience result type used across the crate.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Top-level error type for configuration, host wiring and serialization failures.
///
/// Geometry evaluation itself never fails: degenerate inputs are clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Invalid or unknown configuration (page names, option values).
    #[error("config error: {0}")]
    Config(String),

    /// The host environment could not provide what was asked of it.
    #[error("host error: {0}")]
    Host(String),

    /// User input rejected by a form model.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollFxError::Host`].
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`ScrollFxError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for ScrollFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
