/// Convenience result type used across the crate.
pub type Matrix3dResult<T> = Result<T, Matrix3dError>;

/// Top-level error taxonomy for codec and plugin APIs.
#[derive(thiserror::Error, Debug)]
pub enum Matrix3dError {
    /// A transform string matched neither accepted grammar or carried the wrong number of values.
    #[error("parse error: {0}")]
    Parse(String),

    /// A static-only type was asked to build an instance.
    #[error("instantiation error: {0}")]
    Instantiation(String),

    /// Invalid plugin or formatting configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Matrix3dError {
    /// Build a [`Matrix3dError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`Matrix3dError::Instantiation`] value.
    pub fn instantiation(msg: impl Into<String>) -> Self {
        Self::Instantiation(msg.into())
    }

    /// Build a [`Matrix3dError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`Matrix3dError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for [`Matrix3dError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
