/// Errors that can occur while parsing daemon reports.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A protocol row has too few fields or an unparseable timestamp.
    #[error("malformed protocol line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },

    /// A detail block has no usable header row.
    #[error("malformed protocol block {index}: {reason}")]
    MalformedBlock { index: usize, reason: String },

    /// A route counter fragment could not be read.
    #[error("unparseable route counters {fragment:?}: {reason}")]
    UnparseableRoutes { fragment: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
