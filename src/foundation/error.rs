/// Convenience result type used across kenburns.
pub type KenBurnsResult<T> = Result<T, KenBurnsError>;

/// Top-level error taxonomy used by the public API.
///
/// The animation core itself never fails; these errors come from validating
/// host-supplied settings and from loading them.
#[derive(thiserror::Error, Debug)]
pub enum KenBurnsError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl KenBurnsError {
    /// Build a [`KenBurnsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KenBurnsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KenBurnsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
