use tracing::debug;

use crate::error::{ParseError, Result};
use crate::list::{is_banner, parse_summary_line};
use crate::model::{ProtocolState, Routes};
use crate::whitespace::{normalize_whitespace, Trim};

const ROUTES_MARKER: &str = "Routes:";

/// Parse the `show protocols all` report.
///
/// Blocks are separated by blank (or whitespace-only) lines. Every block
/// yields one [`ProtocolState`]; the first malformed block fails the whole
/// report.
pub fn parse_blocks(text: &str) -> Result<Vec<ProtocolState>> {
    let states = split_blocks(text)
        .iter()
        .enumerate()
        .map(|(index, lines)| parse_block_lines(index, lines))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = states.len(), "parsed protocol details");
    Ok(states)
}

/// Parse a single detail block.
pub fn parse_block(block: &str) -> Result<ProtocolState> {
    let lines: Vec<&str> = block.lines().collect();
    parse_block_lines(0, &lines)
}

/// Parse the text after the `Routes:` marker of a counter line.
///
/// ```text
/// Routes: 120 imported, 4 filtered, 100 exported, 95 preferred
/// ```
///
/// Fragments are `<count> <label>` separated by `", "`. Unknown labels are
/// skipped; a line without the marker reports nothing.
pub fn parse_routes(line: &str) -> Result<Routes> {
    let mut routes = Routes::unreported();

    let normalized = normalize_whitespace(line, Trim::Both);
    let Some((_, counters)) = normalized.split_once(ROUTES_MARKER) else {
        return Ok(routes);
    };

    for fragment in counters.trim().split(", ") {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let unparseable = |reason: &str| ParseError::UnparseableRoutes {
            fragment: fragment.to_string(),
            reason: reason.to_string(),
        };

        let (count, label) = fragment.split_once(' ').unwrap_or((fragment, ""));
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unparseable("count is not a non-negative integer"));
        }
        let count: i64 = count
            .parse()
            .map_err(|_| unparseable("count out of range"))?;

        let Some(slot) = routes.slot_mut(label) else {
            continue;
        };
        if *slot != Routes::NOT_REPORTED {
            return Err(unparseable("counter reported twice"));
        }
        *slot = count;
    }

    Ok(routes)
}

/// Group lines into blank-line separated blocks.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block_lines(index: usize, lines: &[&str]) -> Result<ProtocolState> {
    let mut rest = lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty() && !is_banner(line));

    let header = rest.next().ok_or_else(|| ParseError::MalformedBlock {
        index,
        reason: "no protocol header line".to_string(),
    })?;

    let summary = parse_summary_line(header).map_err(|err| ParseError::MalformedBlock {
        index,
        reason: err.to_string(),
    })?;

    let routes = match rest.find(|line| line.contains(ROUTES_MARKER)) {
        Some(line) => parse_routes(line)?,
        None => Routes::unreported(),
    };

    Ok(ProtocolState::from_summary(summary, routes))
}
