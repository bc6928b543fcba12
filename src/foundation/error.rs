/// Convenience result type used across score-arc.
pub type ScoreArcResult<T> = Result<T, ScoreArcError>;

/// Error taxonomy for the outer surfaces (config loading, output backends, frame loop).
///
/// Rendering and animation math never fail; out-of-range input is clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum ScoreArcError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while turning a scene into pixels or files.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScoreArcError {
    /// Build a [`ScoreArcError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScoreArcError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScoreArcError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
