//! Configuration errors raised at the point of mutation.

use thiserror::Error;

/// Invalid configuration value.
///
/// These are programmer errors with no safe numeric fallback, so setters
/// reject them instead of substituting a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max must be greater than zero, got {0}")]
    InvalidMax(i32),

    #[error("line count must be greater than zero, got {0}")]
    InvalidLineCount(i32),

    #[error("unknown progress style value {0}")]
    UnknownStyle(i32),

    #[error("unknown shader mode value {0}")]
    UnknownShaderMode(i32),

    #[error("unknown stroke cap value {0}")]
    UnknownCap(i32),

    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("invalid color '{0}', expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}
