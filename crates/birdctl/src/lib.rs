//! Client for the BIRD routing daemon's control socket.
//!
//! birdctl sends commands over the daemon's Unix control socket, reassembles
//! the status-coded reply lines into whole responses, and parses protocol
//! reports into typed records.
//!
//! # Crate Structure
//!
//! - [`transport`]: Control socket connect/bind over Unix domain sockets
//! - [`frame`]: Status-code line framing and response assembly
//! - [`parse`]: Protocol listing and detail block parsers
//! - [`client`]: Daemon connection with the one-command-at-a-time guard
//!
//! ```no_run
//! let mut daemon = birdctl::client::connect("/run/bird/bird.ctl")?;
//! for state in daemon.protocol_details()? {
//!     println!("{} {} imported={}", state.name, state.state, state.routes.imported);
//! }
//! # Ok::<(), birdctl::client::ClientError>(())
//! ```

/// Re-export transport types.
pub mod transport {
    pub use birdctl_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use birdctl_frame::*;
}

/// Re-export parser types.
pub mod parse {
    pub use birdctl_parse::*;
}

/// Re-export client types.
pub mod client {
    pub use birdctl_client::*;
}

pub use birdctl_client::{connect, connect_with_config, ClientConfig, ClientError, Daemon};
pub use birdctl_parse::{ProtocolState, ProtocolSummary, Routes};
