//! Error types for grid cells, columns and editing controls.

use horizon_gridcell_render::RenderError;
use horizon_gridcell_style::Error as StyleError;
use thiserror::Error;

use crate::cell::CellKind;

/// Errors raised at the boundary between the host grid and this crate.
///
/// All variants describe integration mistakes and are surfaced immediately.
/// Bad per-cell data never produces an error; it is painted with the
/// fallback image instead.
#[derive(Error, Debug)]
pub enum GridCellError {
    /// A required argument was missing or invalid.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// A column was given a cell template of the wrong kind.
    #[error("invalid cell template: column requires {expected}, got {found}")]
    InvalidCellTemplate { expected: CellKind, found: CellKind },

    /// An image layout mode that cannot be used for fitting.
    #[error("invalid image layout mode: {mode}")]
    InvalidLayoutMode { mode: String },

    /// An edit session or editing control was driven out of order.
    #[error("cannot {action} while {state}")]
    InvalidEditTransition {
        action: &'static str,
        state: String,
    },

    /// Column configuration could not be parsed.
    #[error("invalid column configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Style configuration was rejected.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// An image could not be created.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl GridCellError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Create an invalid edit transition error.
    pub fn invalid_transition(action: &'static str, state: impl Into<String>) -> Self {
        Self::InvalidEditTransition {
            action,
            state: state.into(),
        }
    }
}

/// Result type for grid cell operations.
pub type GridCellResult<T> = Result<T, GridCellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridCellError::InvalidCellTemplate {
            expected: CellKind::ImageOption,
            found: CellKind::Text,
        };
        assert_eq!(
            err.to_string(),
            "invalid cell template: column requires image option cell, got text cell"
        );

        let err = GridCellError::invalid_transition("commit", "displaying");
        assert_eq!(err.to_string(), "cannot commit while displaying");
    }

    #[test]
    fn test_config_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: GridCellError = parse_err.into();
        assert!(matches!(err, GridCellError::Config(_)));
    }
}
