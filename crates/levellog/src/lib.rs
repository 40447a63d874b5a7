#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levellog` is a leveled logging façade over the [`LineWriter`] from
//! `levellog-sink`. A [`Logger`] adds a severity threshold, a logger-owned
//! prefix, optional level labels and ANSI coloring on top of the line
//! writer's date, time and call-site decorations.
//!
//! # Design
//!
//! - [`Level`] orders severities from [`Level::Critical`] (`0`) to
//!   [`Level::Info`] (`5`). A message is written when the logger's threshold
//!   is numerically greater than or equal to the message level.
//! - [`Logger`] keeps its writer, threshold and prefix behind one mutex, so a
//!   single instance can be shared between threads and each message lands on
//!   the destination as one uninterrupted write sequence.
//! - A process-wide default logger ([`default_logger`]) backs the free
//!   functions and the call-site macros ([`info!`], [`warnf!`], ...).
//! - [`LoggerConfig`] describes threshold, flags and prefix and can be read
//!   from `LEVELLOG_*` environment variables.
//! - With the `tracing` feature, [`LoggerLayer`] routes `tracing` events
//!   through a logger.
//!
//! # Invariants
//!
//! - Suppressed messages never format their arguments.
//! - [`Level::Critical`] passes every threshold; `crit` and `critf` always
//!   write their message before panicking with it.
//! - Each line is attributed to the code that called the logging function,
//!   not to a frame inside this crate.
//!
//! # Errors
//!
//! Emitting methods swallow write failures. [`Logger::output`] and
//! [`Logger::flush`] surface the underlying [`std::io::Error`]. Parsing
//! levels, flags and environment configuration reports [`ParseLevelError`],
//! [`ParseFlagsError`] and [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use levellog::{Destination, Flags, Level, Logger};
//!
//! let logger = Logger::with_level(
//!     Destination::stderr(),
//!     "[api]",
//!     Flags::LEVEL | Flags::SHORT_FILE,
//!     Level::Debug,
//! );
//! logger.debugf(format_args!("request {} took {}ms", 17, 42));
//! levellog::warn!(logger: logger, "slow request", 17);
//! levellog::trace!(logger: logger, "not written");
//! ```

mod config;
mod error;
mod global;
mod level;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use levellog_sink::{Destination, Flags, LineMode, LineWriter, SourceLocation};

pub use config::{FLAGS_ENV, LEVEL_ENV, LoggerConfig, PREFIX_ENV, parse_flags};
pub use error::{ConfigError, ParseFlagsError, ParseLevelError};
pub use global::{
    DEFAULT_FLAGS, configure, crit, critf, debug, debugf, default_logger, error, errorf, flags,
    info, infof, level, log, logf, new_prefixed, output, prefix, set_flags, set_level, set_output,
    set_prefix, trace, tracef, warn, warnf,
};
pub use level::{Level, RESET_COLOR};
pub use logger::Logger;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
