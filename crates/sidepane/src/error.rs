#![forbid(unsafe_code)]

//! Unified error model for the sidepane facade.
//!
//! Drag and collapse operations never fail. Errors only come from the edges:
//! configuration validation, trace parsing, and reading trace files.

use std::fmt;

use sidepane_layout::SplitPaneConfigError;
use sidepane_web::DividerTraceError;

/// Top-level error type for sidepane.
#[derive(Debug)]
pub enum Error {
    /// Split configuration failed validation.
    Config(SplitPaneConfigError),
    /// A divider trace could not be parsed.
    Trace(DividerTraceError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for sidepane APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short label for the error category, suitable for log fields.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Trace(_) => "trace",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Trace(err) => write!(f, "trace: {err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Trace(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<SplitPaneConfigError> for Error {
    fn from(err: SplitPaneConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<DividerTraceError> for Error {
    fn from(err: DividerTraceError) -> Self {
        Self::Trace(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
