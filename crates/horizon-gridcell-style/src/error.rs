//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}' for property '{property}'")]
    InvalidColor { property: String, value: String },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
