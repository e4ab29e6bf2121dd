//! Transport for the routing daemon's control socket.
//!
//! The daemon listens on a filesystem-addressed Unix domain socket and speaks
//! a line-oriented text protocol over it. This is the lowest layer of
//! birdctl: it opens the socket and hands back a [`ControlStream`] that the
//! framing layer reads replies from.

pub mod error;
pub mod stream;

#[cfg(unix)]
pub mod uds;

pub use error::{Result, TransportError};
pub use stream::ControlStream;

#[cfg(unix)]
pub use uds::{ControlSocket, DEFAULT_SOCKET_PATH};
