use crate::layer::model::LayerId;

/// Result alias used across the crate.
pub type WardrobeResult<T> = Result<T, WardrobeError>;

/// Crate error type.
///
/// Resolver lookups never produce one of these: ranks, anchors, placements and
/// compatibility checks are total. Errors only come from addressing a layer
/// that does not exist, from invalid configuration, and from the IO-bound
/// collaborators (persistence, generation).
#[derive(thiserror::Error, Debug)]
pub enum WardrobeError {
    /// Invalid input (configuration, duplicate ids, malformed records).
    #[error("validation error: {0}")]
    Validation(String),

    /// The layer id is not present in the store.
    #[error("unknown layer: {0}")]
    UnknownLayer(LayerId),

    /// Persistence collaborator failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Asset generation collaborator failure.
    #[error("generation error: {0}")]
    Generation(String),

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WardrobeError {
    /// Build a [`WardrobeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WardrobeError::Persistence`].
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Build a [`WardrobeError::Generation`].
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`WardrobeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WardrobeError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
