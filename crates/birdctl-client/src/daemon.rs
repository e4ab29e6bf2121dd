use std::io::{Read, Write};

use birdctl_frame::{collect_response, write_command, FrameError, LineReader, Response};
use birdctl_parse::{parse_blocks, parse_summaries, ProtocolState, ProtocolSummary};
use birdctl_transport::ControlStream;
use tracing::{debug, warn};

use crate::command::{SHOW_PROTOCOLS, SHOW_PROTOCOLS_ALL};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// A connection to the daemon's control socket.
///
/// The wire protocol carries no request identifiers, so at most one command
/// may be outstanding. [`Daemon::send`] marks the connection busy and only a
/// fully drained response from [`Daemon::receive`] clears it. A response
/// that fails halfway leaves the connection busy for good: its remaining
/// lines are still in the stream and would be misread as the next reply.
pub struct Daemon<S = ControlStream> {
    reader: LineReader<S>,
    pending: Option<String>,
    greeting: Option<String>,
}

impl<S: Read + Write> Daemon<S> {
    /// Wrap an already-open stream whose greeting has been consumed (or
    /// that never sends one).
    pub fn from_stream(stream: S, config: &ClientConfig) -> Self {
        Self::from_parts(LineReader::with_config(stream, config.frame_config()), None)
    }

    pub(crate) fn from_parts(reader: LineReader<S>, greeting: Option<String>) -> Self {
        Self {
            reader,
            pending: None,
            greeting,
        }
    }

    /// The banner the daemon sent on connect, if it was read.
    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    /// Whether a command is waiting for its response to be drained.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Write one command without reading its response.
    ///
    /// Fails with [`ClientError::Busy`] while an earlier response has not
    /// been fully read.
    pub fn send(&mut self, command: &str) -> Result<()> {
        if let Some(pending) = &self.pending {
            warn!(pending = %pending, command, "command refused: previous response not drained");
            return Err(ClientError::Busy {
                pending: pending.clone(),
            });
        }

        let command = command.trim_end_matches(['\r', '\n']);
        self.pending = Some(command.to_string());
        if let Err(err) = write_command(self.reader.get_mut(), command) {
            // Nothing reached the socket for a rejected command.
            if matches!(err, FrameError::InvalidCommand(_)) {
                self.pending = None;
            }
            return Err(err.into());
        }
        Ok(())
    }

    /// Drain the response to the outstanding command.
    ///
    /// A daemon error reply (`8xxx`/`9xxx`) is still a complete response:
    /// the connection is usable afterwards, and the reply is returned as
    /// [`ClientError::Daemon`].
    pub fn receive(&mut self) -> Result<Response> {
        let Some(command) = self.pending.as_deref() else {
            return Err(ClientError::NotBusy);
        };

        let response = match collect_response(&mut self.reader) {
            Ok(response) => response,
            Err(err) => {
                warn!(command, error = %err, "response incomplete; connection unusable");
                return Err(err.into());
            }
        };

        let command = self.pending.take().unwrap_or_default();
        if response.is_error() {
            let message = response.text.trim().to_string();
            warn!(code = %response.code, command = %command, message = %message, "daemon rejected command");
            return Err(ClientError::Daemon {
                code: response.code,
                command,
                message,
            });
        }

        debug!(command = %command, code = %response.code, "command complete");
        Ok(response)
    }

    /// Send a command and return its assembled response text.
    pub fn command(&mut self, command: &str) -> Result<String> {
        self.send(command)?;
        self.receive().map(|response| response.text)
    }

    /// List configured protocols.
    pub fn protocols(&mut self) -> Result<Vec<ProtocolSummary>> {
        let text = self.command(SHOW_PROTOCOLS)?;
        Ok(parse_summaries(&text)?)
    }

    /// Protocol details, including route counters.
    pub fn protocol_details(&mut self) -> Result<Vec<ProtocolState>> {
        let text = self.command(SHOW_PROTOCOLS_ALL)?;
        Ok(parse_blocks(&text)?)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        self.reader.get_ref()
    }

    /// Consume the connection and return the inner stream.
    pub fn into_inner(self) -> S {
        self.reader.into_inner()
    }
}

impl Daemon<ControlStream> {
    /// Close the connection. A read blocked on it elsewhere returns.
    pub fn close(self) -> Result<()> {
        self.reader.get_ref().shutdown()?;
        Ok(())
    }
}

impl<S> std::fmt::Debug for Daemon<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Daemon")
            .field("pending", &self.pending)
            .field("greeting", &self.greeting)
            .finish()
    }
}
