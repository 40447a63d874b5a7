//! crates/levellog/src/macros.rs
//! Call-site macros for the default logger and for explicit instances.
//!
//! The plain forms take a comma-separated list of [`Display`] values that are
//! joined with single spaces; the `f` forms take a format string and
//! arguments. Any macro accepts a leading `logger: <expr>,` to target a
//! specific [`Logger`] instead of the default one.
//!
//! ```
//! use levellog::{Destination, Flags, Logger};
//!
//! let db = Logger::new(Destination::stderr(), "[db]", Flags::LEVEL);
//! levellog::info!("listening on", 8080);
//! levellog::warnf!(logger: db, "retrying in {}s", 5);
//! ```
//!
//! [`Display`]: std::fmt::Display
//! [`Logger`]: crate::Logger

#[doc(hidden)]
#[macro_export]
macro_rules! __levellog_values {
    ($($value:expr),*) => {
        &[$(&$value as &dyn ::core::fmt::Display),*]
    };
}

/// Logs space-separated values at `Info`.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::info($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Info`.
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Logs space-separated values at `Debug`.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.debug($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::debug($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Debug`.
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debugf(::core::format_args!($($arg)+))
    };
}

/// Logs space-separated values at `Trace`.
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.trace($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::trace($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Trace`.
#[macro_export]
macro_rules! tracef {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.tracef(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::tracef(::core::format_args!($($arg)+))
    };
}

/// Logs space-separated values at `Warning`.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warn($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::warn($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Warning`.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warnf(::core::format_args!($($arg)+))
    };
}

/// Logs space-separated values at `Error`.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::error($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Error`.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Logs space-separated values at `Critical`, then panics with the message.
#[macro_export]
macro_rules! crit {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $logger.crit($crate::__levellog_values!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::crit($crate::__levellog_values!($($value),*))
    };
}

/// Logs a formatted message at `Critical`, then panics with it.
#[macro_export]
macro_rules! critf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.critf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::critf(::core::format_args!($($arg)+))
    };
}

/// Derives a logger whose prefix is extended by a formatted segment.
///
/// ```
/// let worker = levellog::prefixed!("[worker {}]", 3);
/// assert!(worker.prefix().ends_with("[worker 3]"));
/// ```
#[macro_export]
macro_rules! prefixed {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.new_prefixed(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::new_prefixed(::core::format_args!($($arg)+))
    };
}
