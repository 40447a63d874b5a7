//! crates/levellog/src/global.rs
//! Process-wide default logger and the free functions delegating to it.
//!
//! The default logger is built on first use and lives for the rest of the
//! process. It writes to standard error with [`DEFAULT_FLAGS`] at
//! [`Level::Info`]. Every function here forwards to the matching
//! [`Logger`] method on [`default_logger`]; emitting functions are
//! `#[track_caller]` so lines are attributed to their callers.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use levellog_sink::{Destination, Flags, SourceLocation};

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::logger::Logger;

/// Flags of the default logger: date, time, level title and color.
pub const DEFAULT_FLAGS: Flags = Flags::STD.union(Flags::LEVEL).union(Flags::COLOR);

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger, creating it on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| Logger::with_level(Destination::stderr(), "", DEFAULT_FLAGS, Level::Info))
}

/// Applies `config` to the default logger.
pub fn configure(config: &LoggerConfig) {
    default_logger().apply_config(config);
}

/// Replaces the default logger's threshold.
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

/// Returns the default logger's threshold.
#[must_use]
pub fn level() -> Level {
    default_logger().level()
}

/// Replaces the default logger's flags.
pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

/// Returns the default logger's flags.
#[must_use]
pub fn flags() -> Flags {
    default_logger().flags()
}

/// Redirects the default logger, returning its previous destination.
pub fn set_output(out: Destination) -> Destination {
    default_logger().set_output(out)
}

/// Replaces the default logger's prefix.
pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

/// Returns the default logger's prefix.
#[must_use]
pub fn prefix() -> String {
    default_logger().prefix()
}

/// Writes `text` through the default logger's line writer.
pub fn output(location: SourceLocation<'_>, text: &str) -> io::Result<()> {
    default_logger().output(location, text)
}

/// Derives a logger from the default logger with an extended prefix.
#[must_use]
pub fn new_prefixed(segment: fmt::Arguments<'_>) -> Logger {
    default_logger().new_prefixed(segment)
}

/// Logs `values` at `level` on the default logger.
#[track_caller]
pub fn log(level: Level, values: &[&dyn fmt::Display]) {
    default_logger().log(level, values);
}

/// Logs a formatted message at `level` on the default logger.
#[track_caller]
pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    default_logger().logf(level, args);
}

/// Logs `values` at [`Level::Info`] on the default logger.
#[track_caller]
pub fn info(values: &[&dyn fmt::Display]) {
    default_logger().info(values);
}

/// Logs a formatted message at [`Level::Info`] on the default logger.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Logs `values` at [`Level::Debug`] on the default logger.
#[track_caller]
pub fn debug(values: &[&dyn fmt::Display]) {
    default_logger().debug(values);
}

/// Logs a formatted message at [`Level::Debug`] on the default logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Logs `values` at [`Level::Trace`] on the default logger.
#[track_caller]
pub fn trace(values: &[&dyn fmt::Display]) {
    default_logger().trace(values);
}

/// Logs a formatted message at [`Level::Trace`] on the default logger.
#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    default_logger().tracef(args);
}

/// Logs `values` at [`Level::Warning`] on the default logger.
#[track_caller]
pub fn warn(values: &[&dyn fmt::Display]) {
    default_logger().warn(values);
}

/// Logs a formatted message at [`Level::Warning`] on the default logger.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Logs `values` at [`Level::Error`] on the default logger.
#[track_caller]
pub fn error(values: &[&dyn fmt::Display]) {
    default_logger().error(values);
}

/// Logs a formatted message at [`Level::Error`] on the default logger.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Logs `values` on the default logger, then panics with the message.
#[track_caller]
pub fn crit(values: &[&dyn fmt::Display]) -> ! {
    default_logger().crit(values)
}

/// Logs a formatted message on the default logger, then panics with it.
#[track_caller]
pub fn critf(args: fmt::Arguments<'_>) -> ! {
    default_logger().critf(args)
}
