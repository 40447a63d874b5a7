//! crates/levellog/src/level.rs
//! Severity levels and their presentation tables.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// ANSI escape restoring the terminal's default color.
pub const RESET_COLOR: &str = "\x1b[0m";

/// Severity of a log message.
///
/// Levels are ordered by their numeric value, from the most severe
/// ([`Critical`](Self::Critical), `0`) to the most verbose
/// ([`Info`](Self::Info), `5`). A message is emitted when the logger's
/// threshold is numerically greater than or equal to the message level, so
/// raising verbosity means moving the threshold towards `Info`.
///
/// # Examples
///
/// ```
/// use levellog::Level;
///
/// assert!(Level::Error.is_enabled_at(Level::Warning));
/// assert!(!Level::Info.is_enabled_at(Level::Warning));
/// assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable condition; always emitted.
    Critical = 0,
    /// Operation failed.
    Error = 1,
    /// Something unexpected that the program recovered from.
    Warning = 2,
    /// Fine-grained flow tracing.
    Trace = 3,
    /// Diagnostics for developers.
    Debug = 4,
    /// Routine informational output.
    #[default]
    Info = 5,
}

impl Level {
    /// All levels in numeric order.
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Trace,
        Self::Debug,
        Self::Info,
    ];

    /// Returns `true` when a message at this level passes `threshold`.
    #[must_use]
    pub const fn is_enabled_at(self, threshold: Self) -> bool {
        threshold as u8 >= self as u8
    }

    /// ANSI escape written before a colored line at this level.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "\x1b[0;31m",
            Self::Warning => "\x1b[0;33m",
            Self::Trace => "\x1b[0;35m",
            Self::Debug => "\x1b[0;36m",
            Self::Info => "\x1b[0;37m",
        }
    }

    /// Display title used by the level-name label.
    ///
    /// Titles are padded to five characters except `INFO`, which keeps the
    /// historical unpadded form for byte-compatible output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Critical => "CRIT ",
            Self::Error => "ERR  ",
            Self::Warning => "WARN ",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
        }
    }

    /// Single-letter form of [`title`](Self::title).
    #[must_use]
    pub fn short_title(self) -> &'static str {
        &self.title()[..1]
    }

    /// Lowercase canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as Self
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ParseLevelError::new(&value.to_string()))
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "crit" | "critical" | "0" => Ok(Self::Critical),
            "err" | "error" | "1" => Ok(Self::Error),
            "warn" | "warning" | "2" => Ok(Self::Warning),
            "trace" | "3" => Ok(Self::Trace),
            "debug" | "4" => Ok(Self::Debug),
            "info" | "5" => Ok(Self::Info),
            _ => Err(ParseLevelError::new(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_are_fixed() {
        assert_eq!(u8::from(Level::Critical), 0);
        assert_eq!(u8::from(Level::Error), 1);
        assert_eq!(u8::from(Level::Warning), 2);
        assert_eq!(u8::from(Level::Trace), 3);
        assert_eq!(u8::from(Level::Debug), 4);
        assert_eq!(u8::from(Level::Info), 5);
    }

    #[test]
    fn ordering_follows_numeric_values() {
        assert!(Level::Critical < Level::Error);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Trace);
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
    }

    #[test]
    fn critical_passes_every_threshold() {
        for threshold in Level::ALL {
            assert!(Level::Critical.is_enabled_at(threshold));
        }
    }

    #[test]
    fn info_passes_only_info_threshold() {
        for threshold in Level::ALL {
            assert_eq!(Level::Info.is_enabled_at(threshold), threshold == Level::Info);
        }
    }

    #[test]
    fn color_table() {
        assert_eq!(Level::Critical.color(), "\x1b[0;31m");
        assert_eq!(Level::Error.color(), "\x1b[0;31m");
        assert_eq!(Level::Warning.color(), "\x1b[0;33m");
        assert_eq!(Level::Trace.color(), "\x1b[0;35m");
        assert_eq!(Level::Debug.color(), "\x1b[0;36m");
        assert_eq!(Level::Info.color(), "\x1b[0;37m");
        assert_eq!(RESET_COLOR, "\x1b[0m");
    }

    #[test]
    fn title_table() {
        assert_eq!(Level::Critical.title(), "CRIT ");
        assert_eq!(Level::Error.title(), "ERR  ");
        assert_eq!(Level::Warning.title(), "WARN ");
        assert_eq!(Level::Trace.title(), "TRACE");
        assert_eq!(Level::Debug.title(), "DEBUG");
        assert_eq!(Level::Info.title(), "INFO");
    }

    #[test]
    fn short_titles() {
        let letters: Vec<_> = Level::ALL.iter().map(|level| level.short_title()).collect();
        assert_eq!(letters, ["C", "E", "W", "T", "D", "I"]);
    }

    #[test]
    fn parse_names_aliases_and_digits() {
        assert_eq!("CRIT".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("critical".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("err".parse::<Level>(), Ok(Level::Error));
        assert_eq!(" Warning ".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("4".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "verbose".parse::<Level>().expect_err("unknown level");
        assert_eq!(err.input(), "verbose");
        assert!("6".parse::<Level>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Level::try_from(2), Ok(Level::Warning));
        assert!(Level::try_from(6).is_err());
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }
}
