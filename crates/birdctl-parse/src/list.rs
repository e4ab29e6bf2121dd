use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::model::{ProtocolSummary, SINCE_FORMAT};
use crate::whitespace::{normalize_whitespace, tokenize, Trim};

/// Minimum number of tokens in a protocol row.
const MIN_FIELDS: usize = 6;

/// Whether a line is the column header or the daemon greeting rather than
/// a protocol row.
pub(crate) fn is_banner(line: &str) -> bool {
    let line = normalize_whitespace(line, Trim::Both);
    line.contains("Name Proto Table") || (line.starts_with("BIRD") && line.contains("ready"))
}

/// Parse the `show protocols` listing.
///
/// Banner lines and blank lines are skipped. Any other line must be a
/// protocol row; the first one that is not fails the whole listing.
pub fn parse_summaries(text: &str) -> Result<Vec<ProtocolSummary>> {
    let summaries = text
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_banner(line))
        .map(parse_summary_line)
        .collect::<Result<Vec<_>>>()?;

    debug!(count = summaries.len(), "parsed protocol listing");
    Ok(summaries)
}

/// Parse one protocol row:
///
/// ```text
/// <name> <proto> <table> <state> <YYYY-MM-DD> <HH:MM:SS> [info ...]
/// ```
pub fn parse_summary_line(line: &str) -> Result<ProtocolSummary> {
    let malformed = |reason: String| ParseError::MalformedLine {
        line: line.trim().to_string(),
        reason,
    };

    let mut tokens = tokenize(line);
    if tokens.len() < MIN_FIELDS {
        return Err(malformed(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            tokens.len()
        )));
    }

    let since = parse_since(&tokens[4], &tokens[5]).map_err(malformed)?;
    let info = tokens.split_off(MIN_FIELDS).join(" ");
    let mut fields = tokens.into_iter();

    Ok(ProtocolSummary {
        name: fields.next().unwrap_or_default(),
        proto: fields.next().unwrap_or_default(),
        table: fields.next().unwrap_or_default(),
        state: fields.next().unwrap_or_default(),
        since,
        info,
    })
}

/// Digit positions (`9`) and literal separators of the Since column.
const DATE_SHAPE: &[u8; 10] = b"9999-99-99";
const TIME_SHAPE: &[u8; 8] = b"99:99:99";

fn has_shape(token: &str, shape: &[u8]) -> bool {
    token.len() == shape.len()
        && token.bytes().zip(shape).all(|(byte, &expected)| match expected {
            b'9' => byte.is_ascii_digit(),
            literal => byte == literal,
        })
}

fn parse_since(date: &str, time: &str) -> std::result::Result<NaiveDateTime, String> {
    if !has_shape(date, DATE_SHAPE) || !has_shape(time, TIME_SHAPE) {
        return Err(format!("timestamp {date} {time} is not YYYY-MM-DD HH:MM:SS"));
    }
    let since = NaiveDateTime::parse_from_str(&format!("{date} {time}"), SINCE_FORMAT)
        .map_err(|err| format!("invalid timestamp {date} {time}: {err}"))?;
    // chrono reads second 60 as a leap second; the daemon never prints one.
    if since.nanosecond() >= 1_000_000_000 {
        return Err(format!("invalid timestamp {date} {time}: second out of range"));
    }
    Ok(since)
}
