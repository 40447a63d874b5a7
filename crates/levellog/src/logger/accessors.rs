use std::fmt;
use std::io;

use levellog_sink::{Destination, Flags, SourceLocation};

use super::Logger;
use crate::level::Level;

impl Logger {
    /// Replaces the threshold.
    pub fn set_level(&self, level: Level) {
        self.state().level = level;
    }

    /// Returns the threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.state().level
    }

    /// Replaces the presentation flags.
    pub fn set_flags(&self, flags: Flags) {
        self.state().writer.set_flags(flags);
    }

    /// Returns the presentation flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.state().writer.flags()
    }

    /// Redirects output to `out`, returning the previous destination.
    pub fn set_output(&self, out: Destination) -> Destination {
        self.state().writer.replace_writer(out)
    }

    /// Returns a handle to the current destination.
    #[must_use]
    pub fn destination(&self) -> Destination {
        self.state().writer.get_ref().clone()
    }

    /// Replaces the logger-owned prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state().prefix = prefix.into();
    }

    /// Returns a copy of the logger-owned prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.state().prefix.clone()
    }

    /// Writes `text` through the line writer with no level handling.
    ///
    /// The threshold, level label, prefix and color are all bypassed; only
    /// the line writer's timestamp and call-site decorations apply.
    pub fn output(&self, location: SourceLocation<'_>, text: &str) -> io::Result<()> {
        self.state().writer.output(location, text)
    }

    /// Flushes the destination.
    pub fn flush(&self) -> io::Result<()> {
        self.state().writer.flush()
    }

    /// Derives a logger whose prefix extends this logger's prefix.
    ///
    /// The new logger shares this logger's destination and copies its current
    /// flags and threshold. Its prefix is the current prefix followed by the
    /// rendered `segment`, so repeated derivation nests:
    ///
    /// ```
    /// use levellog::{Destination, Flags, Logger};
    ///
    /// let root = Logger::new(Destination::stderr(), "root", Flags::STD);
    /// let inner = root
    ///     .new_prefixed(format_args!("[{}]", "a"))
    ///     .new_prefixed(format_args!("[{}]", "b"));
    /// assert_eq!(inner.prefix(), "root[a][b]");
    /// ```
    #[must_use]
    pub fn new_prefixed(&self, segment: fmt::Arguments<'_>) -> Self {
        let segment = fmt::format(segment);
        let state = self.state();
        let prefix = format!("{}{segment}", state.prefix);
        Self::with_level(
            state.writer.get_ref().clone(),
            prefix,
            state.writer.flags(),
            state.level,
        )
    }
}
