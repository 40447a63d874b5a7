//! Line composition: writer prefix, timestamp, call site, message.

use std::fmt::Write as _;

use time::{OffsetDateTime, UtcOffset};

use crate::flags::Flags;
use crate::line_mode::LineMode;
use crate::location::SourceLocation;

/// Reads the clock in the zone selected by `flags`.
///
/// Falls back to UTC when the local offset cannot be determined.
pub(super) fn current_time(flags: Flags) -> OffsetDateTime {
    if flags.contains(Flags::UTC) {
        OffsetDateTime::now_utc()
    } else {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Appends one fully decorated line to `line`.
///
/// `now` is only consulted when `flags` request a timestamp.
pub(super) fn compose_line(
    line: &mut String,
    flags: Flags,
    prefix: &str,
    now: Option<OffsetDateTime>,
    location: SourceLocation<'_>,
    text: &str,
    line_mode: LineMode,
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    if let Some(now) = now.filter(|_| flags.has_timestamp()) {
        let now = if flags.contains(Flags::UTC) {
            now.to_offset(UtcOffset::UTC)
        } else {
            now
        };
        write_timestamp(line, flags, now);
    }

    if flags.has_file() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            location.short_file()
        } else {
            location.file()
        };
        let _ = write!(line, "{file}:{}: ", location.line());
    }

    if flags.contains(Flags::MSG_PREFIX) {
        line.push_str(prefix);
    }

    line.push_str(text);
    if line_mode.append_newline() && !text.ends_with('\n') {
        line.push('\n');
    }
}

fn write_timestamp(line: &mut String, flags: Flags, now: OffsetDateTime) {
    if flags.contains(Flags::DATE) {
        let _ = write!(
            line,
            "{:04}/{:02}/{:02} ",
            now.year(),
            u8::from(now.month()),
            now.day()
        );
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(
            line,
            "{:02}:{:02}:{:02}",
            now.hour(),
            now.minute(),
            now.second()
        );
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(line, ".{:06}", now.microsecond());
        }
        line.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2009-01-23 01:23:23.123123 UTC);

    fn compose(flags: Flags, prefix: &str, text: &str) -> String {
        let mut line = String::new();
        compose_line(
            &mut line,
            flags,
            prefix,
            Some(AT),
            SourceLocation::from_parts("/a/b/c/d.rs", 23),
            text,
            LineMode::WithNewline,
        );
        line
    }

    #[test]
    fn no_flags_writes_bare_text() {
        assert_eq!(compose(Flags::empty(), "", "hello"), "hello\n");
    }

    #[test]
    fn std_flags_render_date_and_time() {
        assert_eq!(
            compose(Flags::STD | Flags::UTC, "", "hello"),
            "2009/01/23 01:23:23 hello\n"
        );
    }

    #[test]
    fn microseconds_imply_time() {
        assert_eq!(
            compose(Flags::MICROSECONDS | Flags::UTC, "", "x"),
            "01:23:23.123123 x\n"
        );
    }

    #[test]
    fn long_and_short_file() {
        assert_eq!(compose(Flags::LONG_FILE, "", "x"), "/a/b/c/d.rs:23: x\n");
        assert_eq!(compose(Flags::SHORT_FILE, "", "x"), "d.rs:23: x\n");
        assert_eq!(
            compose(Flags::LONG_FILE | Flags::SHORT_FILE, "", "x"),
            "d.rs:23: x\n"
        );
    }

    #[test]
    fn prefix_placement_follows_msg_prefix() {
        assert_eq!(compose(Flags::SHORT_FILE, "p: ", "x"), "p: d.rs:23: x\n");
        assert_eq!(
            compose(Flags::SHORT_FILE | Flags::MSG_PREFIX, "p: ", "x"),
            "d.rs:23: p: x\n"
        );
    }

    #[test]
    fn utc_converts_offset_timestamps() {
        let mut line = String::new();
        let shifted = datetime!(2009-01-23 03:23:23 +02:00);
        compose_line(
            &mut line,
            Flags::STD | Flags::UTC,
            "",
            Some(shifted),
            SourceLocation::unknown(),
            "x",
            LineMode::WithNewline,
        );
        assert_eq!(line, "2009/01/23 01:23:23 x\n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        assert_eq!(compose(Flags::empty(), "", "x\n"), "x\n");
    }

    #[test]
    fn without_newline_mode_keeps_text() {
        let mut line = String::new();
        compose_line(
            &mut line,
            Flags::empty(),
            "",
            None,
            SourceLocation::unknown(),
            "x",
            LineMode::WithoutNewline,
        );
        assert_eq!(line, "x");
    }

    #[test]
    fn level_bits_are_ignored() {
        assert_eq!(
            compose(Flags::LEVEL | Flags::SHORT_LEVEL | Flags::COLOR, "", "x"),
            "x\n"
        );
    }
}
