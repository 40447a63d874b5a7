//! crates/levellog/src/config.rs
//! Logger configuration assembled from code or environment variables.

use levellog_sink::{Destination, Flags};

use crate::error::{ConfigError, ParseFlagsError};
use crate::global::DEFAULT_FLAGS;
use crate::level::Level;
use crate::logger::Logger;

/// Environment variable holding the threshold (`warn`, `debug`, `2`, ...).
pub const LEVEL_ENV: &str = "LEVELLOG_LEVEL";
/// Environment variable holding the flag specification (`std|shortfile|color`).
pub const FLAGS_ENV: &str = "LEVELLOG_FLAGS";
/// Environment variable holding the logger prefix.
pub const PREFIX_ENV: &str = "LEVELLOG_PREFIX";

/// Threshold, presentation flags and prefix for a [`Logger`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Threshold level.
    pub level: Level,
    /// Presentation flags.
    #[cfg_attr(feature = "serde", serde(with = "flag_bits"))]
    pub flags: Flags,
    /// Logger-owned prefix.
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            flags: DEFAULT_FLAGS,
            prefix: String::new(),
        }
    }
}

impl LoggerConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Unset variables keep their [`Default`] values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_vars(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use levellog::{Flags, Level, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_env_vars(|name| match name {
    ///     "LEVELLOG_LEVEL" => Some("warn".to_owned()),
    ///     "LEVELLOG_FLAGS" => Some("shortfile|shortlevel".to_owned()),
    ///     _ => None,
    /// })?;
    ///
    /// assert_eq!(config.level, Level::Warning);
    /// assert_eq!(config.flags, Flags::SHORT_FILE | Flags::SHORT_LEVEL);
    /// assert!(config.prefix.is_empty());
    /// # Ok::<(), levellog::ConfigError>(())
    /// ```
    pub fn from_env_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LEVEL_ENV) {
            config.level = value.parse().map_err(|source| ConfigError::Level {
                var: LEVEL_ENV,
                source,
            })?;
        }
        if let Some(value) = lookup(FLAGS_ENV) {
            config.flags = parse_flags(&value).map_err(|source| ConfigError::Flags {
                var: FLAGS_ENV,
                source,
            })?;
        }
        if let Some(value) = lookup(PREFIX_ENV) {
            config.prefix = value;
        }

        Ok(config)
    }
}

/// Parses a flag specification such as `"std | shortfile, color"`.
///
/// Tokens are separated by `|`, `,` or whitespace and are case-insensitive.
/// A decimal number contributes its bits verbatim. An empty specification
/// yields no flags.
pub fn parse_flags(spec: &str) -> Result<Flags, ParseFlagsError> {
    let mut flags = Flags::empty();

    for token in spec
        .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let flag = match token.to_ascii_lowercase().as_str() {
            "date" => Flags::DATE,
            "time" => Flags::TIME,
            "microseconds" | "micro" => Flags::MICROSECONDS,
            "longfile" => Flags::LONG_FILE,
            "shortfile" => Flags::SHORT_FILE,
            "utc" => Flags::UTC,
            "msgprefix" => Flags::MSG_PREFIX,
            "std" | "stdflags" => Flags::STD,
            "level" => Flags::LEVEL,
            "shortlevel" => Flags::SHORT_LEVEL,
            "color" => Flags::COLOR,
            other => other
                .parse::<u32>()
                .map(Flags::from_bits_retain)
                .map_err(|_| ParseFlagsError::new(token))?,
        };
        flags |= flag;
    }

    Ok(flags)
}

impl Logger {
    /// Creates a logger configured by `config`.
    #[must_use]
    pub fn from_config(out: Destination, config: &LoggerConfig) -> Self {
        Self::with_level(out, config.prefix.clone(), config.flags, config.level)
    }

    /// Applies `config` to this logger in place.
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.set_level(config.level);
        self.set_flags(config.flags);
        self.set_prefix(config.prefix.clone());
    }
}

#[cfg(feature = "serde")]
mod flag_bits {
    use levellog_sink::Flags;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(flags: &Flags, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(flags.bits())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Flags, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Flags::from_bits_retain)
    }
}
