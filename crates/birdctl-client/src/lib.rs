//! Connection management for the routing daemon's control socket.
//!
//! A [`Daemon`] owns one control socket stream and runs the strict
//! command/response cycle over it: write a command, drain its response,
//! and only then write the next one. The parsed reports come back as
//! [`ProtocolSummary`] and [`ProtocolState`] records.

pub mod command;
pub mod config;
pub mod connector;
pub mod daemon;
pub mod error;
pub mod greeting;

pub use birdctl_parse::{ProtocolState, ProtocolSummary, Routes};
pub use command::{SHOW_PROTOCOLS, SHOW_PROTOCOLS_ALL};
pub use config::ClientConfig;
pub use connector::{connect, connect_with_config};
pub use daemon::Daemon;
pub use error::{ClientError, Result};
pub use greeting::read_greeting;
