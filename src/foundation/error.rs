use std::num::ParseFloatError;
use std::path::PathBuf;

/// Convenience result type used across floorplot.
pub type FloorplotResult<T> = Result<T, FloorplotError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum FloorplotError {
    /// The input (or an output) file could not be opened, read or written.
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A five-token record line carried a numeric field that is not a float.
    #[error("parse error at line {line}: {field} '{token}' is not a number: {source}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Record field name (`width`, `height`, `x` or `y`).
        field: &'static str,
        /// Offending token, verbatim.
        token: String,
        /// Underlying float conversion error.
        #[source]
        source: ParseFloatError,
    },

    /// Invalid user-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while rasterizing, exporting or presenting a plot.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FloorplotError {
    /// Build a [`FloorplotError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`FloorplotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FloorplotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FloorplotError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
