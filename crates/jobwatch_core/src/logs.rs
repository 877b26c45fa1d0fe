/// Level keyword recognised in a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl LogLevel {
    const ALL: [LogLevel; 3] = [LogLevel::Error, LogLevel::Warning, LogLevel::Info];

    pub fn token(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
        }
    }

    pub fn style(self) -> SpanStyle {
        match self {
            LogLevel::Error => SpanStyle::AlertStrong,
            LogLevel::Warning => SpanStyle::AlertWarn,
            LogLevel::Info => SpanStyle::Muted,
        }
    }
}

/// Rendering style of a piece of log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    AlertStrong,
    AlertWarn,
    Muted,
    /// Text around a level keyword.
    Neutral,
    /// A line without any level keyword.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedLine<'a> {
    Plain(&'a str),
    Marked {
        prefix: &'a str,
        level: LogLevel,
        suffix: &'a str,
    },
}

impl<'a> ClassifiedLine<'a> {
    /// The line split into styled segments. Concatenating the texts gives
    /// back the original line.
    pub fn segments(&self) -> Vec<(&'a str, SpanStyle)> {
        match *self {
            ClassifiedLine::Plain(line) => vec![(line, SpanStyle::Plain)],
            ClassifiedLine::Marked {
                prefix,
                level,
                suffix,
            } => vec![
                (prefix, SpanStyle::Neutral),
                (level.token(), level.style()),
                (suffix, SpanStyle::Neutral),
            ],
        }
    }
}

/// Splits `line` around the leftmost `ERROR`, `WARNING` or `INFO`.
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    for (idx, _) in line.char_indices() {
        let rest = &line[idx..];
        for level in LogLevel::ALL {
            let token = level.token();
            if rest.starts_with(token) {
                return ClassifiedLine::Marked {
                    prefix: &line[..idx],
                    level,
                    suffix: &rest[token.len()..],
                };
            }
        }
    }
    ClassifiedLine::Plain(line)
}

/// Lines of a `/logs` payload, newest first. A trailing newline does not
/// produce an empty first line.
pub fn lines_newest_first(text: &str) -> Vec<&str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').rev().collect()
}

/// Warning and error totals for a log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogCounts {
    pub warnings: usize,
    pub errors: usize,
}

impl LogCounts {
    /// Counts non-overlapping occurrences of `WARNING` and `ERROR`.
    pub fn from_text(text: &str) -> Self {
        Self {
            warnings: text.matches(LogLevel::Warning.token()).count(),
            errors: text.matches(LogLevel::Error.token()).count(),
        }
    }
}
