//! crates/levellog-sink/src/flags.rs
//! Presentation flag bitset shared by the line writer and the level logger.

use bitflags::bitflags;

bitflags! {
    /// Decoration toggles applied to every emitted line.
    ///
    /// The low bits are interpreted by [`LineWriter`](crate::LineWriter) and
    /// keep the numbering of the classic line-logger flag set so previously
    /// stored configuration values remain valid. [`LEVEL`](Self::LEVEL),
    /// [`SHORT_LEVEL`](Self::SHORT_LEVEL) and [`COLOR`](Self::COLOR) belong to
    /// the level layer; the line writer stores them but never acts on them.
    ///
    /// # Examples
    ///
    /// ```
    /// use levellog_sink::Flags;
    ///
    /// let flags = Flags::STD | Flags::SHORT_FILE;
    /// assert!(flags.contains(Flags::DATE | Flags::TIME));
    /// assert_eq!(flags.bits(), 0b1_0011);
    /// ```
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct Flags: u32 {
        /// Local date, `2009/01/23`.
        const DATE = 1 << 0;
        /// Local time, `01:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution, `01:23:23.123123`. Implies [`TIME`](Self::TIME).
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number, `/a/b/c/d.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final path element and line number, `d.rs:23`. Overrides [`LONG_FILE`](Self::LONG_FILE).
        const SHORT_FILE = 1 << 4;
        /// Render date and time in UTC rather than the local time zone.
        const UTC = 1 << 5;
        /// Move the writer prefix from the start of the line to just before the message.
        const MSG_PREFIX = 1 << 6;
        /// Initial values for the standard writer, [`DATE`](Self::DATE) | [`TIME`](Self::TIME).
        const STD = Self::DATE.bits() | Self::TIME.bits();
        /// Full, padded level title before the message.
        const LEVEL = 1 << 12;
        /// Single-letter level label. Wins over [`LEVEL`](Self::LEVEL) when both are set.
        const SHORT_LEVEL = 1 << 13;
        /// Wrap each line in the ANSI color of its level.
        const COLOR = 1 << 14;
    }
}

impl Flags {
    /// Returns `true` when any timestamp component is requested.
    #[must_use]
    pub const fn has_timestamp(self) -> bool {
        self.intersects(Self::DATE.union(Self::TIME).union(Self::MICROSECONDS))
    }

    /// Returns `true` when the call site should be rendered.
    #[must_use]
    pub const fn has_file(self) -> bool {
        self.intersects(Self::LONG_FILE.union(Self::SHORT_FILE))
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::STD
    }
}
