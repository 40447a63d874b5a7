use std::fmt;
use std::io;

use levellog_sink::{Flags, SourceLocation};

use super::{Logger, Spaced};
use crate::level::{Level, RESET_COLOR};

impl Logger {
    /// Returns `true` when a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.state().level)
    }

    /// Logs `values` at `level`, separated by single spaces.
    #[track_caller]
    pub fn log(&self, level: Level, values: &[&dyn fmt::Display]) {
        self.log_at(
            SourceLocation::caller(),
            level,
            format_args!("{}", Spaced(values)),
        );
    }

    /// Logs a formatted message at `level`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_at(SourceLocation::caller(), level, args);
    }

    /// Logs a formatted message at `level`, attributed to `location`.
    ///
    /// This is the entry point for adapters that already know the call site,
    /// such as the tracing bridge.
    pub fn log_at(&self, location: SourceLocation<'_>, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let message = fmt::format(args);
        let _ = self.emit(location, level, &message);
    }

    /// Logs `values` at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Info, values);
    }

    /// Logs a formatted message at [`Level::Info`].
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    /// Logs `values` at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Debug, values);
    }

    /// Logs a formatted message at [`Level::Debug`].
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    /// Logs `values` at [`Level::Trace`].
    #[track_caller]
    pub fn trace(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Trace, values);
    }

    /// Logs a formatted message at [`Level::Trace`].
    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Trace, args);
    }

    /// Logs `values` at [`Level::Warning`].
    #[track_caller]
    pub fn warn(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Warning, values);
    }

    /// Logs a formatted message at [`Level::Warning`].
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warning, args);
    }

    /// Logs `values` at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, values: &[&dyn fmt::Display]) {
        self.log(Level::Error, values);
    }

    /// Logs a formatted message at [`Level::Error`].
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Logs `values` at [`Level::Critical`], then panics with the message.
    ///
    /// The message is written whatever the threshold is, because
    /// `Critical` passes every threshold. The panic payload is the rendered
    /// message as a `String`.
    #[track_caller]
    pub fn crit(&self, values: &[&dyn fmt::Display]) -> ! {
        self.fatal_at(SourceLocation::caller(), format_args!("{}", Spaced(values)))
    }

    /// Logs a formatted message at [`Level::Critical`], then panics with it.
    #[track_caller]
    pub fn critf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_at(SourceLocation::caller(), args)
    }

    #[track_caller]
    fn fatal_at(&self, location: SourceLocation<'_>, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        let _ = self.emit(location, Level::Critical, &message);
        panic!("{message}");
    }

    /// Writes one message: color escape, decorated line, reset escape.
    ///
    /// The three parts reach the destination in a single write, so loggers
    /// sharing a destination never split each other's messages.
    fn emit(&self, location: SourceLocation<'_>, level: Level, message: &str) -> io::Result<()> {
        let mut state = self.state();
        if !level.is_enabled_at(state.level) {
            return Ok(());
        }

        let flags = state.writer.flags();
        let text = compose_text(flags, level, &state.prefix, message);
        if flags.contains(Flags::COLOR) {
            state
                .writer
                .output_framed(location, &text, level.color(), RESET_COLOR)
        } else {
            state.writer.output(location, &text)
        }
    }
}

/// Builds `level label + prefix + message`.
fn compose_text(flags: Flags, level: Level, prefix: &str, message: &str) -> String {
    let label = if flags.contains(Flags::SHORT_LEVEL) {
        level.short_title()
    } else if flags.contains(Flags::LEVEL) {
        level.title()
    } else {
        ""
    };

    let mut text = String::with_capacity(label.len() + prefix.len() + message.len() + 2);
    if !label.is_empty() {
        text.push_str(label);
        text.push(' ');
    }
    if !prefix.is_empty() {
        text.push_str(prefix);
        text.push(' ');
    }
    text.push_str(message);
    text
}
