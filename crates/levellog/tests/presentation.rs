//! Labels, prefixes, colors and call-site decorations of emitted lines.

mod support;

use levellog::{Flags, Level, RESET_COLOR, SourceLocation};
use support::captured;

#[test]
fn short_level_label_with_logger_prefix() {
    let (logger, capture) = captured("[db]", Flags::SHORT_LEVEL, Level::Info);
    logger.warnf(format_args!("pool at {}%", 93));
    assert_eq!(capture.contents(), "W [db] pool at 93%\n");
}

#[test]
fn long_level_labels_are_padded_except_info() {
    let (logger, capture) = captured("", Flags::LEVEL, Level::Info);

    logger.error(&[&"e"]);
    logger.warn(&[&"w"]);
    logger.trace(&[&"t"]);
    logger.debug(&[&"d"]);
    logger.info(&[&"i"]);

    assert_eq!(
        capture.contents(),
        "ERR   e\nWARN  w\nTRACE t\nDEBUG d\nINFO i\n"
    );
}

#[test]
fn short_level_takes_precedence_over_level() {
    let (logger, capture) = captured("", Flags::LEVEL | Flags::SHORT_LEVEL, Level::Info);
    logger.debug(&[&"d"]);
    assert_eq!(capture.contents(), "D d\n");
}

#[test]
fn values_are_joined_with_single_spaces() {
    let (logger, capture) = captured("", Flags::empty(), Level::Info);
    logger.info(&[&"listening on", &8080, &true]);
    assert_eq!(capture.contents(), "listening on 8080 true\n");
}

#[test]
fn color_escapes_wrap_the_line() {
    let (logger, capture) = captured("", Flags::COLOR | Flags::SHORT_LEVEL, Level::Info);
    logger.warn(&[&"hot"]);

    let expected = format!("{}W hot\n{RESET_COLOR}", Level::Warning.color());
    assert_eq!(capture.contents(), expected);
}

#[test]
fn suppressed_colored_message_writes_nothing() {
    let (logger, capture) = captured("", Flags::COLOR, Level::Error);
    logger.info(&[&"quiet"]);
    assert!(capture.contents().is_empty());
}

#[test]
fn short_file_reports_the_calling_file() {
    let (logger, capture) = captured("", Flags::SHORT_FILE, Level::Info);
    let line = line!() + 1;
    logger.info(&[&"here"]);

    assert_eq!(capture.contents(), format!("presentation.rs:{line}: here\n"));
}

#[test]
fn long_file_reports_the_full_path() {
    let (logger, capture) = captured("", Flags::LONG_FILE, Level::Info);
    logger.errorf(format_args!("boom"));

    let text = capture.contents();
    assert!(text.starts_with(file!()), "{text}");
    assert!(text.ends_with(": boom\n"), "{text}");
}

#[test]
fn timestamp_flags_add_date_and_time() {
    let (logger, capture) = captured("", Flags::STD | Flags::UTC, Level::Info);
    logger.info(&[&"stamped"]);

    let text = capture.contents();
    // "YYYY/MM/DD HH:MM:SS stamped\n"
    assert_eq!(text.len(), 20 + "stamped\n".len(), "{text}");
    assert_eq!(&text[4..5], "/");
    assert_eq!(&text[13..14], ":");
    assert!(text.ends_with(" stamped\n"));
}

#[test]
fn output_bypasses_level_handling() {
    let (logger, capture) = captured("[p]", Flags::LEVEL | Flags::COLOR, Level::Critical);
    logger
        .output(SourceLocation::unknown(), "raw")
        .expect("write succeeds");
    assert_eq!(capture.contents(), "raw\n");
}

#[test]
fn flags_can_change_between_messages() {
    let (logger, capture) = captured("", Flags::empty(), Level::Info);
    logger.info(&[&"plain"]);
    logger.set_flags(Flags::SHORT_LEVEL);
    logger.info(&[&"labelled"]);
    assert_eq!(capture.contents(), "plain\nI labelled\n");
}
