//! Command strings understood by the daemon.
//!
//! Commands are sent verbatim; the client never rewrites them.

/// One row per configured protocol.
pub const SHOW_PROTOCOLS: &str = "show protocols";

/// One block per protocol, including channel state and route counters.
pub const SHOW_PROTOCOLS_ALL: &str = "show protocols all";
