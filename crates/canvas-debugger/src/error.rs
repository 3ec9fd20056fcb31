#![deny(unsafe_code)]

use std::path::PathBuf;

/// Structural integrity failures found while walking a widget's parents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisibilityError {
    #[error("cyclic parent chain while resolving {widget}: widget id {repeated_id} seen twice")]
    CyclicParentChain { widget: String, repeated_id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route pattern must start with '/': {pattern}")]
    NotAbsolute { pattern: String },

    #[error("route pattern {pattern} has an empty segment")]
    EmptySegment { pattern: String },

    #[error("route pattern {pattern} has an invalid parameter name: {name}")]
    InvalidParam { pattern: String, name: String },

    #[error("route pattern {pattern} does not compile: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error(transparent)]
    Route(#[from] RouteError),
}
