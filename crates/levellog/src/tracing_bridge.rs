//! crates/levellog/src/tracing_bridge.rs
//! Bridge between the tracing crate and levellog loggers.
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that renders each tracing
//! event through a [`Logger`]. Event levels are mapped onto the logger's
//! levels and the event's source file and line become the call site, so
//! `shortfile` and `longfile` decorations keep working for code that logs
//! through `tracing` macros.
//!
//! # Usage
//!
//! ```rust,ignore
//! use levellog::init_tracing;
//!
//! init_tracing().expect("no other global subscriber");
//! tracing::warn!(attempt = 3, "upstream timed out");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use levellog_sink::SourceLocation;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::default_logger;
use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a levellog [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    target: Target,
}

#[derive(Clone, Debug)]
enum Target {
    Default,
    Instance(Arc<Logger>),
}

impl LoggerLayer {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self {
            target: Target::Instance(logger),
        }
    }

    /// Creates a layer writing through the process-wide default logger.
    #[must_use]
    pub const fn for_default_logger() -> Self {
        Self {
            target: Target::Default,
        }
    }

    /// Maps a tracing level onto a levellog level.
    ///
    /// `ERROR` and `WARN` keep their meaning; `INFO`, `DEBUG` and `TRACE`
    /// map to the levels of the same name.
    #[must_use]
    pub const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Trace,
        }
    }

    fn logger(&self) -> &Logger {
        match &self.target {
            Target::Default => default_logger(),
            Target::Instance(logger) => logger,
        }
    }
}

impl Default for LoggerLayer {
    fn default() -> Self {
        Self::for_default_logger()
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        let logger = self.logger();
        if !logger.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => SourceLocation::from_parts(file, line),
            _ => SourceLocation::unknown(),
        };
        logger.log_at(location, level, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field followed by `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

/// Installs a global subscriber routing tracing events to the default logger.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::for_default_logger())
        .try_init()
}

/// Like [`init_tracing`], with an extra filter layer in front of the logger.
///
/// ```rust,ignore
/// use tracing_subscriber::filter::LevelFilter;
///
/// levellog::init_tracing_with_filter(LevelFilter::WARN)?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::for_default_logger())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use levellog_sink::{Destination, Flags};
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn layer_with(flags: Flags, level: Level) -> (LoggerLayer, Capture) {
        let capture = Capture::default();
        let logger = Logger::with_level(Destination::new(capture.clone()), "", flags, level);
        (LoggerLayer::new(Arc::new(logger)), capture)
    }

    #[test]
    fn map_level_covers_every_tracing_level() {
        assert_eq!(LoggerLayer::map_level(&tracing::Level::ERROR), Level::Error);
        assert_eq!(LoggerLayer::map_level(&tracing::Level::WARN), Level::Warning);
        assert_eq!(LoggerLayer::map_level(&tracing::Level::INFO), Level::Info);
        assert_eq!(LoggerLayer::map_level(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(LoggerLayer::map_level(&tracing::Level::TRACE), Level::Trace);
    }

    #[test]
    fn events_are_rendered_with_fields() {
        let (layer, capture) = layer_with(Flags::SHORT_LEVEL, Level::Info);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(attempt = 3, host = "db1", "upstream timed out");
        });

        assert_eq!(capture.text(), "W upstream timed out attempt=3 host=\"db1\"\n");
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let (layer, capture) = layer_with(Flags::LEVEL, Level::Warning);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hidden");
            tracing::error!("shown");
        });

        assert_eq!(capture.text(), "ERR   shown\n");
    }

    #[test]
    fn event_location_is_used_for_file_flag() {
        let (layer, capture) = layer_with(Flags::SHORT_FILE, Level::Info);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("located");
        });

        let text = capture.text();
        assert!(text.starts_with("tracing_bridge.rs:"), "{text}");
        assert!(text.ends_with(": located\n"), "{text}");
    }
}
