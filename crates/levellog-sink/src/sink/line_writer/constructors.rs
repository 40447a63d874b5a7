use super::LineWriter;
use crate::flags::Flags;
use crate::line_mode::LineMode;

impl<W> LineWriter<W> {
    /// Creates a writer that terminates every line with a newline.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, flags: Flags) -> Self {
        Self::with_line_mode(writer, prefix, flags, LineMode::WithNewline)
    }

    /// Creates a writer with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(
        writer: W,
        prefix: impl Into<String>,
        flags: Flags,
        line_mode: LineMode,
    ) -> Self {
        Self {
            writer,
            prefix: prefix.into(),
            flags,
            line_mode,
        }
    }

    /// Returns the active flags.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Replaces the active flags.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Returns the writer-owned prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the writer-owned prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent lines.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the line writer and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LineWriter<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default(), String::new(), Flags::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let mut writer = LineWriter::new(Vec::<u8>::new(), "a", Flags::STD);
        assert_eq!(writer.prefix(), "a");
        assert_eq!(writer.flags(), Flags::STD);
        assert_eq!(writer.line_mode(), LineMode::WithNewline);

        writer.set_prefix("b");
        writer.set_flags(Flags::SHORT_FILE | Flags::COLOR);
        writer.set_line_mode(LineMode::WithoutNewline);

        assert_eq!(writer.prefix(), "b");
        assert_eq!(writer.flags(), Flags::SHORT_FILE | Flags::COLOR);
        assert_eq!(writer.line_mode(), LineMode::WithoutNewline);
    }

    #[test]
    fn default_uses_std_flags_and_empty_prefix() {
        let writer: LineWriter<Vec<u8>> = LineWriter::default();
        assert_eq!(writer.flags(), Flags::STD);
        assert!(writer.prefix().is_empty());
        assert!(writer.get_ref().is_empty());
    }
}
