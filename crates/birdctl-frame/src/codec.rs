use std::time::Duration;

use bytes::{Bytes, BytesMut};

use crate::status::StatusCode;

/// Default line buffer capacity, newline included.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024;

/// Length of a status code prefix plus its separator byte.
const PREFIX_LEN: usize = 5;

/// One logical line of a daemon reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyLine {
    /// Status code, or `None` for a continuation fragment.
    pub code: Option<StatusCode>,
    /// Payload with the prefix stripped and the line terminator kept.
    pub content: Bytes,
}

impl ReplyLine {
    /// Whether more lines belong to the current response.
    pub fn more(&self) -> bool {
        self.code.is_none_or(|code| !code.is_terminal())
    }

    /// Whether this line continues the previous coded line.
    pub fn is_continuation(&self) -> bool {
        self.code.is_none()
    }
}

/// Split a raw line (terminator included) into status code and content.
///
/// ```text
/// ┌──────────────┬───────────┬──────────────────────┐
/// │ Code (4B)    │ Sep (1B)  │ Payload              │
/// │ ASCII digits │ ' ' / '-' │ (rest, incl. '\n')   │
/// └──────────────┴───────────┴──────────────────────┘
///        or
/// ┌──────────────┬──────────────────────────────────┐
/// │ Marker (1B)  │ Payload (rest, incl. '\n')       │
/// └──────────────┴──────────────────────────────────┘
/// ```
///
/// Content is everything after the prefix, so a coded line with an empty
/// payload (`1006-\n`) still contributes its newline; the daemon uses those
/// to separate detail blocks.
pub fn classify_line(mut line: BytesMut) -> ReplyLine {
    match StatusCode::from_prefix(&line) {
        Some(code) => {
            let content = line.split_off(PREFIX_LEN.min(line.len()));
            ReplyLine {
                code: Some(code),
                content: content.freeze(),
            }
        }
        None => {
            let content = line.split_off(1.min(line.len()));
            ReplyLine {
                code: None,
                content: content.freeze(),
            }
        }
    }
}

/// Configuration for reading replies and writing commands.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Capacity of the line buffer, newline included. Default: 1024.
    pub max_line_len: usize,
    /// Read timeout applied to the transport.
    pub read_timeout: Option<Duration>,
    /// Write timeout applied to the transport.
    pub write_timeout: Option<Duration>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            read_timeout: None,
            write_timeout: None,
        }
    }
}
