//! crates/levellog-sink/src/location.rs
//! Call-site attribution for emitted lines.

use std::fmt;
use std::panic::Location;

/// Source file and line a log line is attributed to.
///
/// Public logging entry points are annotated with `#[track_caller]`, so
/// [`SourceLocation::caller`] resolves to the code that invoked them rather
/// than to any frame inside the logging crates.
///
/// # Examples
///
/// ```
/// use levellog_sink::SourceLocation;
///
/// let location = SourceLocation::from_parts("src/net/conn.rs", 42);
/// assert_eq!(location.short_file(), "conn.rs");
/// assert_eq!(location.to_string(), "src/net/conn.rs:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> SourceLocation<'a> {
    /// Creates a location from a file path and line number.
    #[must_use]
    pub const fn from_parts(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Placeholder used when the call site cannot be resolved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self { file: "???", line: 0 }
    }

    /// Returns the full file path.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the final path component of the file.
    #[must_use]
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl SourceLocation<'static> {
    /// Captures the location of the caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl<'a> From<&Location<'a>> for SourceLocation<'a> {
    fn from(location: &Location<'a>) -> Self {
        Self::from_parts(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
