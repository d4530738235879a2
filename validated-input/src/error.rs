//! Configuration errors.
//!
//! A value failing its rule is not an error; it is the `false` verdict.
//! These types only describe field configurations that cannot be evaluated.

use thiserror::Error;

use crate::rules::ValidationKind;

/// Why a rule could not be evaluated.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    #[error("validation kind '{0}' is not recognized")]
    UnrecognizedKind(String),

    #[error("validation kind '{kind}' requires the '{param}' parameter")]
    MissingParameter {
        kind: ValidationKind,
        param: &'static str,
    },

    #[error("invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("validation pattern '{0}' is not cached")]
    PatternNotCached(String),
}

/// Errors loading a [`crate::config::FieldConfig`] from data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse field config: {0}")]
    Parse(#[from] serde_json::Error),
}
