#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levellog-sink` is the line-oriented writer underneath the `levellog`
//! façade. It turns a piece of text into one complete output line, optionally
//! decorated with a prefix, a date/time stamp and the source location the line
//! is attributed to, and hands that line to any [`std::io::Write`] target.
//!
//! # Design
//!
//! The crate exposes [`LineWriter`], a small wrapper that owns its writer, a
//! prefix string and a [`Flags`] bitset. [`LineWriter::output`] composes the
//! decorated line in a scratch buffer and issues a single `write_all`, so a
//! destination that serialises writes (such as [`Destination`]) never sees a
//! half-written line. Call sites are carried as [`SourceLocation`] values,
//! which callers capture with `#[track_caller]`.
//!
//! # Invariants
//!
//! - Flag bits keep the classic line-logger numbering (`DATE = 1` through
//!   `MSG_PREFIX = 64`); the level bits above them are stored but ignored.
//! - `LineMode::WithNewline` never doubles a newline already present at the
//!   end of the text.
//!
//! # Errors
//!
//! All write operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use levellog_sink::{Flags, LineWriter, SourceLocation};
//!
//! let mut writer = LineWriter::new(Vec::new(), "", Flags::SHORT_FILE);
//! writer.output(SourceLocation::from_parts("src/lib.rs", 3), "started")?;
//! writer.write_raw(b"raw bytes")?;
//!
//! let output = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(output, "lib.rs:3: started\nraw bytes");
//! # Ok::<(), std::io::Error>(())
//! ```

mod destination;
mod flags;
mod line_mode;
mod location;
mod sink;

pub use destination::Destination;
pub use flags::Flags;
pub use line_mode::LineMode;
pub use location::SourceLocation;
pub use sink::LineWriter;
