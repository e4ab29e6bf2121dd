use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::reader::LineReader;
use crate::status::StatusCode;

/// One fully drained daemon response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Concatenated line contents, terminators kept.
    pub text: String,
    /// Status code of the line that closed the response.
    pub code: StatusCode,
}

impl Response {
    /// Whether the daemon reported the command as failed.
    pub fn is_error(&self) -> bool {
        self.code.is_error()
    }
}

/// Drain one response and return its text.
pub fn collect<T: Read>(reader: &mut LineReader<T>) -> Result<String> {
    collect_response(reader).map(|response| response.text)
}

/// Drain one response, keeping the closing status code.
///
/// Lines are read until the first terminal status code and nothing after
/// it. On any error the text gathered so far is dropped and the stream is
/// left mid-response.
pub fn collect_response<T: Read>(reader: &mut LineReader<T>) -> Result<Response> {
    let mut text = Vec::new();
    let mut lines = 0usize;

    loop {
        let line = reader.read_line()?;
        lines += 1;
        text.extend_from_slice(&line.content);

        if let Some(code) = line.code.filter(|code| code.is_terminal()) {
            let text = String::from_utf8_lossy(&text).into_owned();
            debug!(%code, lines, bytes = text.len(), "response complete");
            return Ok(Response { text, code });
        }
    }
}
