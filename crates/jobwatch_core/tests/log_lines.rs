use jobwatch_core::{classify_line, lines_newest_first, ClassifiedLine, LogCounts, LogLevel, SpanStyle};
use pretty_assertions::assert_eq;

fn rejoin(line: &str) -> String {
    classify_line(line)
        .segments()
        .into_iter()
        .map(|(text, _)| text)
        .collect()
}

#[test]
fn classified_segments_reproduce_every_line() {
    let text = "2025-10-12 22:44:01 | INFO | [Scrape] started\n\
                2025-10-12 22:44:02 | WARNING | stripe slow, INFO retry\n\
                plain line without level\n\
                ERRORERROR\n\
                \n\
                café ERROR ünïcode";
    for line in text.split('\n') {
        assert_eq!(rejoin(line), line);
    }
}

#[test]
fn leftmost_keyword_wins() {
    let line = "x INFO then ERROR";
    assert_eq!(
        classify_line(line),
        ClassifiedLine::Marked {
            prefix: "x ",
            level: LogLevel::Info,
            suffix: " then ERROR",
        }
    );
}

#[test]
fn suffix_keeps_repeated_keywords() {
    let classified = classify_line("ERROR a ERROR b");
    assert_eq!(
        classified.segments(),
        vec![
            ("", SpanStyle::Neutral),
            ("ERROR", SpanStyle::AlertStrong),
            (" a ERROR b", SpanStyle::Neutral),
        ]
    );
}

#[test]
fn styles_follow_level() {
    assert_eq!(LogLevel::Error.style(), SpanStyle::AlertStrong);
    assert_eq!(LogLevel::Warning.style(), SpanStyle::AlertWarn);
    assert_eq!(LogLevel::Info.style(), SpanStyle::Muted);
}

#[test]
fn line_without_keyword_is_plain() {
    assert_eq!(classify_line("info lower case"), ClassifiedLine::Plain("info lower case"));
    assert_eq!(
        classify_line("").segments(),
        vec![("", SpanStyle::Plain)]
    );
}

#[test]
fn counts_non_overlapping_occurrences() {
    let counts = LogCounts::from_text("a WARNING b ERROR c WARNING");
    assert_eq!(counts, LogCounts { warnings: 2, errors: 1 });
    assert_eq!(LogCounts::from_text(""), LogCounts::default());
    assert_eq!(LogCounts::from_text("WARNINGWARNING ERRORS").warnings, 2);
}

#[test]
fn lines_are_reversed_for_newest_first() {
    assert_eq!(lines_newest_first("one\ntwo\nthree\n"), vec!["three", "two", "one"]);
    assert_eq!(lines_newest_first("one\n\ntwo"), vec!["two", "", "one"]);
    assert!(lines_newest_first("").is_empty());
    assert!(lines_newest_first("\n").is_empty());
}
