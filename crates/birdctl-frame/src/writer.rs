use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};
use tracing::debug;

use crate::error::{FrameError, Result};

/// Encode a command as a single protocol line.
///
/// Trailing line terminators are stripped and exactly one `\n` is appended.
/// Empty commands and commands with embedded line breaks are rejected: the
/// daemon would read them as several commands and answer each one.
pub fn encode_command(command: &str, dst: &mut BytesMut) -> Result<()> {
    let command = command.trim_end_matches(['\r', '\n']);
    if command.trim().is_empty() {
        return Err(FrameError::InvalidCommand("command is empty".to_string()));
    }
    if command.contains(['\r', '\n']) {
        return Err(FrameError::InvalidCommand(format!(
            "command contains a line break: {command:?}"
        )));
    }

    dst.reserve(command.len() + 1);
    dst.put_slice(command.as_bytes());
    dst.put_u8(b'\n');
    Ok(())
}

/// Write one command line and flush (blocking).
pub fn write_command<W: Write>(writer: &mut W, command: &str) -> Result<()> {
    let mut buf = BytesMut::new();
    encode_command(command, &mut buf)?;

    let mut offset = 0usize;
    while offset < buf.len() {
        match writer.write(&buf[offset..]) {
            Ok(0) => return Err(FrameError::ConnectionClosed),
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FrameError::Io(err)),
        }
    }

    loop {
        match writer.flush() {
            Ok(()) => break,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FrameError::Io(err)),
        }
    }

    debug!(command = command.trim_end(), "command sent");
    Ok(())
}
