/// Convenience result type used across Signwave.
pub type SignwaveResult<T> = Result<T, SignwaveError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Lookup misses and unready collaborators are recovered locally by the
/// playback loop; they appear here only when a caller asks for something the
/// engine cannot degrade around.
#[derive(thiserror::Error, Debug)]
pub enum SignwaveError {
    /// Invalid user-provided or definition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A clip or gesture lookup found nothing usable.
    #[error("lookup miss: {0}")]
    Lookup(String),

    /// A collaborator the operation needs is not loaded yet.
    #[error("resource unready: {0}")]
    Unready(String),

    /// The upstream transcription service reported a failure.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SignwaveError {
    /// Build a [`SignwaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SignwaveError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`SignwaveError::Unready`] value.
    pub fn unready(msg: impl Into<String>) -> Self {
        Self::Unready(msg.into())
    }

    /// Build a [`SignwaveError::Upstream`] value.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
