//! Error types for the delta-e core.
//!
//! The numeric conversions themselves never fail; errors only arise at the
//! parsing and configuration edges.

use thiserror::Error;

/// Errors produced while parsing colors or loading conversion options.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Conversion options were malformed or out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
