/// What to do with whitespace at the ends of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Collapse leading/trailing runs to a single space like any other run.
    Keep,
    /// Remove leading/trailing whitespace entirely.
    Both,
}

/// Collapse every run of whitespace into one ASCII space.
///
/// Uses the Unicode `White_Space` property, which covers tabs, line breaks
/// and the `Zs` space separators (no-break space, em space, ...).
pub fn normalize_whitespace(input: &str, trim: Trim) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run && (trim == Trim::Keep || !out.is_empty()) {
            out.push(' ');
        }
        in_run = false;
        out.push(ch);
    }

    if in_run && trim == Trim::Keep {
        out.push(' ');
    }
    out
}

/// Normalize, trim and split a line into single-space separated tokens.
pub(crate) fn tokenize(line: &str) -> Vec<String> {
    let normalized = normalize_whitespace(line, Trim::Both);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(' ').map(str::to_string).collect()
}
