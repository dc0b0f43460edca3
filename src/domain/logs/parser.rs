use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::entities::log_record::{LogCandidate, ParsedLogs};

/// `[<timestamp>] [<level>] <station> - <message>`, anchored at line start.
///
/// The station is the shortest run before the first ` - `; the message is
/// everything after it.
#[allow(clippy::expect_used)]
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\] \[(.*?)\] (.*?) - (.*)").expect("log line pattern is valid")
});

const LEVEL_KEY: &str = "log level";
const MESSAGE_KEY: &str = "message";
const STATION_KEY: &str = "station";
const SOURCE_KEY: &str = "_source";

fn normalize_level(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parses one line of a line-oriented log file.
///
/// The timestamp is matched but not kept. Returns `None` for lines that do
/// not have the bracketed shape.
#[must_use]
pub fn parse_line(line: &str) -> Option<LogCandidate> {
    let caps = LINE_PATTERN.captures(line)?;
    Some(LogCandidate {
        level: normalize_level(&caps[2]),
        message: caps[4].trim().to_string(),
        station: caps[3].trim().to_string(),
        raw_line: Some(line.trim_end_matches(['\r', '\n']).to_string()),
    })
}

/// Parses one element of a structured source.
///
/// Non-object elements do not match. A missing or non-string `log level`
/// becomes an empty level, which the filter rejects later. When the element
/// wraps its fields in a `_source` object, those fields are read instead.
#[must_use]
pub fn parse_record(value: &Value) -> Option<LogCandidate> {
    let outer = value.as_object()?;
    let fields = outer
        .get(SOURCE_KEY)
        .and_then(Value::as_object)
        .unwrap_or(outer);

    let text = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };

    Some(LogCandidate {
        level: normalize_level(&text(LEVEL_KEY)),
        message: text(MESSAGE_KEY),
        station: text(STATION_KEY),
        raw_line: None,
    })
}

/// Parses a whole line-oriented corpus. Blank lines are skipped without
/// being counted as dropped.
pub fn parse_lines<'a, I>(lines: I) -> ParsedLogs
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = ParsedLogs::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(candidate) => parsed.candidates.push(candidate),
            None => parsed.dropped += 1,
        }
    }
    parsed
}

/// Parses a structured corpus already held in memory.
#[must_use]
pub fn parse_records(records: &[Value]) -> ParsedLogs {
    let mut parsed = ParsedLogs::default();
    for record in records {
        match parse_record(record) {
            Some(candidate) => parsed.candidates.push(candidate),
            None => parsed.dropped += 1,
        }
    }
    parsed
}
