//! crates/levellog-sink/src/destination.rs
//! Cloneable handle to the writer a logger emits into.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Shared output destination.
///
/// Clones refer to the same underlying writer, which lets a derived logger
/// keep writing wherever its parent writes. Each `write` call locks the
/// writer for its duration, so a line handed over in one `write_all` is never
/// interleaved with output from another handle.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use levellog_sink::Destination;
///
/// let mut out = Destination::new(Vec::<u8>::new());
/// let mut alias = out.clone();
/// out.write_all(b"one ")?;
/// alias.write_all(b"two")?;
/// assert!(out.same_as(&alias));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct Destination {
    inner: SharedWriter,
}

impl Destination {
    /// Wraps `writer` in a new shared handle.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Destination writing to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Destination writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Returns `true` when both handles refer to the same writer.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn clones_share_the_writer() {
        let capture = Capture::default();
        let mut first = Destination::new(capture.clone());
        let mut second = first.clone();

        first.write_all(b"a").expect("write succeeds");
        second.write_all(b"b").expect("write succeeds");

        assert!(first.same_as(&second));
        assert_eq!(capture.0.lock().expect("capture lock").as_slice(), b"ab");
    }

    #[test]
    fn separate_destinations_are_distinct() {
        let first = Destination::new(Vec::<u8>::new());
        let second = Destination::new(Vec::<u8>::new());
        assert!(!first.same_as(&second));
    }

    #[test]
    fn debug_does_not_require_writer_debug() {
        let destination = Destination::stderr();
        assert!(format!("{destination:?}").starts_with("Destination"));
    }
}
