/// Convenience result type used across driftline.
pub type DriftResult<T> = Result<T, DriftError>;

/// Top-level error taxonomy used by generator, config and renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum DriftError {
    /// A construction precondition was violated (line count, sample count, scale, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A variant name was parsed strictly and matched no known section.
    ///
    /// Lookups through [`crate::resolve`] never surface this; they fall back to hero.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing variant tables.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftError {
    /// Build a [`DriftError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`DriftError::UnknownVariant`] value.
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant(name.into())
    }

    /// Build a [`DriftError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DriftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
