/// Convenience result type used across the crate.
pub type RewindResult<T> = Result<T, RewindError>;

/// Error taxonomy shared by the composition and session APIs.
///
/// Composition itself never fails on bad input data; these values surface from
/// explicit validation, per-component rendering and the fetch boundary.
#[derive(thiserror::Error, Debug)]
pub enum RewindError {
    /// Invalid configuration or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An `HH:MM:SS` timestamp could not be parsed.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// A component payload does not match its renderer's data contract.
    #[error("payload error: {0}")]
    Payload(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Transport failure while fetching a video description. Retryable.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RewindError {
    /// Build a [`RewindError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RewindError::Timestamp`] value.
    pub fn timestamp(msg: impl Into<String>) -> Self {
        Self::Timestamp(msg.into())
    }

    /// Build a [`RewindError::Payload`] value.
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    /// Build a [`RewindError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`RewindError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RewindError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// `true` for failures worth retrying (transport only).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

impl From<serde_json::Error> for RewindError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
