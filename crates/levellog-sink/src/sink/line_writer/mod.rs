use std::fmt;

use crate::flags::Flags;
use crate::line_mode::LineMode;

/// Line-oriented writer that decorates text with a prefix, timestamp and call site.
///
/// Each call to [`output`](Self::output) renders one complete line into a
/// scratch string and hands it to the underlying writer with a single
/// `write_all`. The decorations are selected by the writer's [`Flags`]; the
/// level bits ([`Flags::LEVEL`], [`Flags::SHORT_LEVEL`], [`Flags::COLOR`]) are
/// stored but ignored here.
///
/// # Examples
///
/// ```
/// use levellog_sink::{Flags, LineWriter, SourceLocation};
///
/// let mut writer = LineWriter::new(Vec::new(), "app: ", Flags::SHORT_FILE);
/// writer.output(SourceLocation::from_parts("src/main.rs", 7), "ready")?;
///
/// assert_eq!(writer.into_inner(), b"app: main.rs:7: ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LineWriter<W> {
    writer: W,
    prefix: String,
    flags: Flags,
    line_mode: LineMode,
}

mod constructors;
mod header;
mod mapping;
mod writing;

impl<W> fmt::Debug for LineWriter<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("writer", &self.writer)
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
