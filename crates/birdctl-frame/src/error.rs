/// Errors that can occur while framing daemon replies or writing commands.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// No newline arrived before the line buffer filled up.
    #[error("reply line too long (no newline within {max} bytes)")]
    LineTooLong { max: usize },

    /// An I/O error occurred while reading replies or writing commands.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The daemon closed the connection in the middle of a response.
    #[error("connection closed (incomplete response)")]
    ConnectionClosed,

    /// The command cannot be sent as a single protocol line.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

impl FrameError {
    /// True for failures of the underlying byte stream, as opposed to
    /// framing violations or caller mistakes.
    pub fn is_transport(&self) -> bool {
        matches!(self, FrameError::Io(_) | FrameError::ConnectionClosed)
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
