use std::io::{self, Write};

use super::LineWriter;
use super::header::{compose_line, current_time};
use crate::location::SourceLocation;

impl<W> LineWriter<W>
where
    W: Write,
{
    /// Writes `text` as one decorated line attributed to `location`.
    ///
    /// The prefix, timestamp and call site are rendered according to the
    /// writer's flags. A newline is appended when the [`LineMode`] asks for one
    /// and `text` does not already end with `\n`.
    ///
    /// [`LineMode`]: crate::LineMode
    pub fn output(&mut self, location: SourceLocation<'_>, text: &str) -> io::Result<()> {
        self.output_framed(location, text, "", "")
    }

    /// Like [`output`](Self::output), with `open` before the line and `close`
    /// after it.
    ///
    /// All three parts go out in one `write_all`, so a destination that
    /// serialises writes keeps them together even when several writers share
    /// it.
    pub fn output_framed(
        &mut self,
        location: SourceLocation<'_>,
        text: &str,
        open: &str,
        close: &str,
    ) -> io::Result<()> {
        let now = self.flags.has_timestamp().then(|| current_time(self.flags));
        let mut line =
            String::with_capacity(open.len() + self.prefix.len() + text.len() + close.len() + 48);
        line.push_str(open);
        compose_line(
            &mut line,
            self.flags,
            &self.prefix,
            now,
            location,
            text,
            self.line_mode,
        );
        line.push_str(close);
        self.writer.write_all(line.as_bytes())
    }

    /// Writes `bytes` verbatim, bypassing every decoration.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
