use birdctl_frame::StatusCode;

/// Errors that can occur on a daemon connection.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] birdctl_transport::TransportError),

    /// Framing error while reading a reply or writing a command.
    #[error("frame error: {0}")]
    Frame(#[from] birdctl_frame::FrameError),

    /// The daemon's report did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] birdctl_parse::ParseError),

    /// A command was issued while the previous response was not drained.
    #[error("connection busy: response to {pending:?} not fully read")]
    Busy { pending: String },

    /// A response was requested with no command outstanding.
    #[error("no command outstanding")]
    NotBusy,

    /// The daemon did not greet with a ready banner.
    #[error("unexpected greeting {code}: {text}")]
    UnexpectedGreeting { code: StatusCode, text: String },

    /// The daemon rejected the command.
    #[error("daemon error {code} for {command:?}: {message}")]
    Daemon {
        code: StatusCode,
        command: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
