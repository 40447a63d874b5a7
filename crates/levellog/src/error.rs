//! crates/levellog/src/error.rs
//! Errors produced while parsing levels, flags and configuration.

use thiserror::Error;

/// Error returned when text does not name a [`Level`](crate::Level).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level {input:?}; expected crit, err, warn, trace, debug, info or 0-5")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error returned when a flag specification contains an unknown token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown presentation flag {token:?}")]
pub struct ParseFlagsError {
    token: String,
}

impl ParseFlagsError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// Returns the offending token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Error returned when environment configuration cannot be applied.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The level variable held an unknown level.
    #[error("invalid {var}: {source}")]
    Level {
        /// Name of the variable that was read.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// The flags variable held an unknown token.
    #[error("invalid {var}: {source}")]
    Flags {
        /// Name of the variable that was read.
        var: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseFlagsError,
    },
}
