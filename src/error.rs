//! Error types for configuration, engine setup and protocol input
//!
//! Search and evaluation never fail; only building a session and parsing
//! host input can.

use std::path::PathBuf;

/// Configuration loading and validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::EngineConfig`]
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// A value is outside its accepted range
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised while building an engine session
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Transposition table memory could not be reserved
    #[error("failed to allocate transposition table with {slots} slots")]
    TableAllocation { slots: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for engine setup
pub type EngineResult<T> = Result<T, EngineError>;

/// Malformed protocol input; the driver logs it and skips the line
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` is missing an argument")]
    MissingArgument { command: &'static str },

    #[error("`{command}`: `{value}` is not an integer")]
    InvalidNumber {
        command: &'static str,
        value: String,
    },

    #[error("side id {0} is not 1 or 2")]
    InvalidSide(i64),

    #[error("({row}, {col}) is off the board")]
    OffBoard { row: i64, col: i64 },
}
