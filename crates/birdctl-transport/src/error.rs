use std::path::PathBuf;

/// Control socket failures.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The control socket could not be opened. `source` is usually
    /// `NotFound` (daemon not running) or `PermissionDenied`.
    #[error("cannot connect to control socket {path}: {source}")]
    Connect {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot bind control socket {path}: {source}")]
    Bind {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Something other than a socket already occupies the bind path.
    #[error("refusing to replace non-socket file at {path}")]
    NotASocket { path: PathBuf },

    #[error("accept on control socket failed: {0}")]
    Accept(std::io::Error),

    #[error("control socket I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path exceeds the `sun_path` limit.
    #[error("control socket path is {len} bytes, limit is {max}: {path}")]
    PathTooLong {
        path: PathBuf,
        len: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, TransportError>;
