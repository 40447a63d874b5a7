//! crates/levellog/src/logger/mod.rs
//! The level-filtering logger instance.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use levellog_sink::{Destination, Flags, LineWriter};

use crate::level::Level;

mod accessors;
mod emit;

/// Leveled logger writing decorated lines to a shared [`Destination`].
///
/// A `Logger` combines a [`LineWriter`] with a severity threshold and a
/// logger-owned prefix. Messages whose level does not pass the threshold
/// (see [`Level::is_enabled_at`]) are dropped without formatting their
/// arguments. Emitted messages are composed as
/// `level label + prefix + " " + message` and attributed to the code that
/// called the logging method.
///
/// All methods take `&self`; the mutable configuration lives behind a mutex
/// so one instance can be shared between threads. The color escape, the
/// decorated line and the reset escape of one message are written under a
/// single lock acquisition and never interleave with another message from
/// the same logger.
///
/// # Examples
///
/// ```
/// use levellog::{Destination, Flags, Level, Logger};
///
/// let logger = Logger::with_level(Destination::stderr(), "[db]", Flags::LEVEL, Level::Warning);
/// logger.warnf(format_args!("pool at {}% capacity", 93));
/// logger.info(&[&"suppressed"]);
/// assert_eq!(logger.level(), Level::Warning);
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

struct LoggerState {
    writer: LineWriter<Destination>,
    level: Level,
    prefix: String,
}

impl Logger {
    /// Creates a logger with threshold [`Level::Info`].
    #[must_use]
    pub fn new(out: Destination, prefix: impl Into<String>, flags: Flags) -> Self {
        Self::with_level(out, prefix, flags, Level::Info)
    }

    /// Creates a logger with an explicit threshold.
    #[must_use]
    pub fn with_level(
        out: Destination,
        prefix: impl Into<String>,
        flags: Flags,
        level: Level,
    ) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                writer: LineWriter::new(out, String::new(), flags),
                level,
                prefix: prefix.into(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("flags", &state.writer.flags())
            .field("prefix", &state.prefix)
            .field("out", state.writer.get_ref())
            .finish()
    }
}

/// Displays a list of values separated by single spaces.
pub(crate) struct Spaced<'a>(pub(crate) &'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}
