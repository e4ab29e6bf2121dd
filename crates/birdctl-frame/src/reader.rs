use std::io::{ErrorKind, Read};

use birdctl_transport::ControlStream;
use bytes::BytesMut;
use tracing::trace;

use crate::codec::{classify_line, FrameConfig, ReplyLine};
use crate::error::{FrameError, Result};

/// Reads reply lines from any `Read` stream.
///
/// Bytes are pulled one at a time so the stream is never advanced past the
/// newline that ends the current line. Nothing is buffered between calls:
/// the next command's reply is still entirely in the stream when a
/// response has been drained.
pub struct LineReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> LineReader<T> {
    /// Create a new line reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new line reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Read the next reply line (blocking).
    ///
    /// Returns `Err(FrameError::LineTooLong)` when `max_line_len` bytes
    /// arrive without a newline and `Err(FrameError::ConnectionClosed)` on
    /// EOF.
    pub fn read_line(&mut self) -> Result<ReplyLine> {
        let max = self.config.max_line_len;
        let mut buf = BytesMut::with_capacity(max);
        let mut byte = [0u8; 1];

        loop {
            if buf.len() >= max {
                return Err(FrameError::LineTooLong { max });
            }

            let read = match self.inner.read(&mut byte) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };
            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            buf.extend_from_slice(&byte);
            if byte[0] == b'\n' {
                break;
            }
        }

        let line = classify_line(buf);
        trace!(
            code = ?line.code,
            len = line.content.len(),
            more = line.more(),
            "reply line"
        );
        Ok(line)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current line reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl LineReader<ControlStream> {
    /// Create a line reader for a control stream and apply both timeouts
    /// from config.
    pub fn with_config_stream(inner: ControlStream, config: FrameConfig) -> Result<Self> {
        inner
            .set_read_timeout(config.read_timeout)
            .and_then(|()| inner.set_write_timeout(config.write_timeout))
            .map_err(transport_to_frame_error)?;
        Ok(Self::with_config(inner, config))
    }
}

fn transport_to_frame_error(err: birdctl_transport::TransportError) -> FrameError {
    match err {
        birdctl_transport::TransportError::Io(io)
        | birdctl_transport::TransportError::Accept(io) => FrameError::Io(io),
        birdctl_transport::TransportError::Bind { source, .. }
        | birdctl_transport::TransportError::Connect { source, .. } => FrameError::Io(source),
        other => FrameError::Io(std::io::Error::other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::status::{OK, PROTOCOL_LIST};

    #[test]
    fn reads_lines_in_order() {
        let wire = b"1002-bgp1 BGP\n  Routes: 1 imported\n0000 \n".to_vec();
        let mut reader = LineReader::new(Cursor::new(wire));

        let first = reader.read_line().unwrap();
        assert_eq!(first.code, Some(PROTOCOL_LIST));
        assert_eq!(first.content.as_ref(), b"bgp1 BGP\n");
        assert!(first.more());

        let second = reader.read_line().unwrap();
        assert_eq!(second.code, None);
        assert_eq!(second.content.as_ref(), b" Routes: 1 imported\n");
        assert!(second.more());

        let last = reader.read_line().unwrap();
        assert_eq!(last.code, Some(OK));
        assert!(!last.more());
    }

    #[test]
    fn does_not_read_past_newline() {
        let wire = b"0000 done\nNEXT".to_vec();
        let mut reader = LineReader::new(Cursor::new(wire));

        reader.read_line().unwrap();
        assert_eq!(reader.get_ref().position(), 10);
    }

    #[test]
    fn line_filling_buffer_exactly_is_accepted() {
        let mut wire = b"1002-".to_vec();
        wire.extend(std::iter::repeat_n(b'x', 16 - 6));
        wire.push(b'\n');
        assert_eq!(wire.len(), 16);

        let cfg = FrameConfig {
            max_line_len: 16,
            ..FrameConfig::default()
        };
        let mut reader = LineReader::with_config(Cursor::new(wire), cfg);
        let line = reader.read_line().unwrap();
        assert_eq!(line.content.len(), 11);
    }

    #[test]
    fn line_without_newline_in_window_is_too_long() {
        let wire = vec![b'x'; 64];
        let cfg = FrameConfig {
            max_line_len: 16,
            ..FrameConfig::default()
        };
        let mut reader = LineReader::with_config(Cursor::new(wire), cfg);
        let err = reader.read_line().unwrap_err();
        assert!(matches!(err, FrameError::LineTooLong { max: 16 }));
        assert_eq!(reader.get_ref().position(), 16);
    }

    #[test]
    fn default_window_is_1024_bytes() {
        let wire = vec![b'y'; 2048];
        let mut reader = LineReader::new(Cursor::new(wire));
        let err = reader.read_line().unwrap_err();
        assert!(matches!(err, FrameError::LineTooLong { max: 1024 }));
    }

    #[test]
    fn eof_mid_line_is_connection_closed() {
        let mut reader = LineReader::new(Cursor::new(b"1002-partial".to_vec()));
        let err = reader.read_line().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
        assert!(err.is_transport());
    }

    #[test]
    fn eof_before_any_byte_is_connection_closed() {
        let mut reader = LineReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(matches!(
            reader.read_line().unwrap_err(),
            FrameError::ConnectionClosed
        ));
    }

    #[test]
    fn interrupted_read_retries() {
        let reader = FlakyReader {
            fail_with: Some(ErrorKind::Interrupted),
            bytes: b"0000 ok\n".to_vec(),
            pos: 0,
        };
        let mut framed = LineReader::new(reader);
        let line = framed.read_line().unwrap();
        assert_eq!(line.content.as_ref(), b"ok\n");
    }

    #[test]
    fn transport_failure_propagates() {
        let reader = FlakyReader {
            fail_with: Some(ErrorKind::ConnectionReset),
            bytes: b"0000 ok\n".to_vec(),
            pos: 0,
        };
        let mut framed = LineReader::new(reader);
        let err = framed.read_line().unwrap_err();
        assert!(matches!(err, FrameError::Io(ref e) if e.kind() == ErrorKind::ConnectionReset));
        assert!(err.is_transport());
    }

    #[test]
    fn timeout_propagates_as_io_error() {
        let reader = FlakyReader {
            fail_with: Some(ErrorKind::WouldBlock),
            bytes: Vec::new(),
            pos: 0,
        };
        let mut framed = LineReader::new(reader);
        let err = framed.read_line().unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::WouldBlock));
    }

    struct FlakyReader {
        fail_with: Option<ErrorKind>,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if let Some(kind) = self.fail_with.take() {
                return Err(std::io::Error::from(kind));
            }
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    #[cfg(unix)]
    fn applies_timeouts_for_control_stream() {
        let (left, _right) = std::os::unix::net::UnixStream::pair().unwrap();
        let stream = ControlStream::from_unix(left);
        let cfg = FrameConfig {
            read_timeout: Some(std::time::Duration::from_millis(10)),
            write_timeout: Some(std::time::Duration::from_millis(10)),
            ..FrameConfig::default()
        };

        let mut reader = LineReader::with_config_stream(stream, cfg).unwrap();
        let err = reader.read_line().unwrap_err();
        assert!(matches!(
            err,
            FrameError::Io(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut)
        ));
    }
}
