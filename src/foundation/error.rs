/// Convenience result type used across the crate.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// Configuring and drawing a [`crate::BadgedDrawerArrow`] never fails; errors only come from
/// loading fonts, shaping labels, allocating raster surfaces and parsing host configuration.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font loading or label shaping failed.
    #[error("text error: {0}")]
    Text(String),

    /// Raster surface allocation or readback failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Build a [`BadgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BadgeError::Text`] value.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }

    /// Build a [`BadgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BadgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
