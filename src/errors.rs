//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors that occur while validating snowflake options
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a snowflake needs at least one arm")]
    #[diagnostic(
        code(flakegen::config::zero_arms),
        help("set num_arms to 1 or more; 6 gives the classic shape")
    )]
    ZeroArms,

    #[error("invalid {field}: {source}")]
    #[diagnostic(code(flakegen::config::invalid_value))]
    InvalidValue {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("invalid {field}: {value} is not a whole, non-negative count")]
    #[diagnostic(code(flakegen::config::invalid_count))]
    InvalidCount { field: &'static str, value: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while finishing a rendered document
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("nothing was drawn")]
    #[diagnostic(
        code(flakegen::render::empty_drawing),
        help("draw at least one non-empty path before finishing")
    )]
    EmptyDrawing,

    #[error("infinite or NaN in bounds")]
    #[diagnostic(code(flakegen::render::invalid_bounds))]
    InvalidBounds,

    #[error("failed to write document: {message}")]
    #[diagnostic(code(flakegen::render::write))]
    Write { message: String },
}
