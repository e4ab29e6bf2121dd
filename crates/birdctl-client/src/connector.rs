use std::path::Path;

use birdctl_frame::LineReader;
#[cfg(unix)]
use birdctl_transport::ControlSocket;

use crate::config::ClientConfig;
use crate::daemon::Daemon;
use crate::error::Result;
use crate::greeting::read_greeting;

/// Connect to the daemon's control socket with default configuration.
pub fn connect(path: impl AsRef<Path>) -> Result<Daemon> {
    connect_with_config(path, &ClientConfig::default())
}

/// Connect with explicit configuration.
///
/// Timeouts are applied before the greeting is read, so a socket that
/// accepts but never greets fails with a timeout instead of hanging.
pub fn connect_with_config(path: impl AsRef<Path>, config: &ClientConfig) -> Result<Daemon> {
    #[cfg(not(unix))]
    {
        let _ = config;
        let path = path.as_ref().to_path_buf();
        return Err(birdctl_transport::TransportError::Connect {
            path,
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "the control socket is a Unix domain socket",
            ),
        }
        .into());
    }

    #[cfg(unix)]
    {
        let stream = ControlSocket::connect(path)?;
        let mut reader = LineReader::with_config_stream(stream, config.frame_config())?;
        let greeting = read_greeting(&mut reader)?;
        Ok(Daemon::from_parts(reader, Some(greeting)))
    }
}
