use std::mem;

use super::LineWriter;

impl<W> LineWriter<W> {
    /// Replaces the underlying writer, keeping prefix, flags and line mode.
    ///
    /// The previous writer is returned so buffered output can be inspected or
    /// flushed before it is dropped.
    #[must_use = "the returned writer holds everything written before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flags, SourceLocation};

    #[test]
    fn replace_writer_returns_previous_output() {
        let mut writer = LineWriter::new(Vec::new(), "", Flags::empty());
        writer
            .output(SourceLocation::unknown(), "first")
            .expect("write succeeds");

        let previous = writer.replace_writer(Vec::new());
        writer
            .output(SourceLocation::unknown(), "second")
            .expect("write succeeds");

        assert_eq!(previous, b"first\n");
        assert_eq!(writer.into_inner(), b"second\n");
    }
}
