/// Convenience result type used across Traceline.
pub type TracelineResult<T> = Result<T, TracelineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The sampling math itself never fails: degenerate inputs (empty paths,
/// coincident points, out-of-range progress) produce well-defined defaults.
/// Errors exist only at the edges: configuration validation and
/// serialization surfaces.
#[derive(thiserror::Error, Debug)]
pub enum TracelineError {
    /// Invalid user-provided data (paths, canvas dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid configuration values (speed, stroke width).
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracelineError {
    /// Build a [`TracelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TracelineError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TracelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
