//! Parsers for the routing daemon's protocol reports.
//!
//! Both reports are column-padded text. A protocol row looks like
//!
//! ```text
//! bgp1       BGP        master4    up     2023-05-01 10:00:00  Established
//! ```
//!
//! and the detail report adds indented lines under each row, among them an
//! optional route counter line:
//!
//! ```text
//!     Routes:         120 imported, 4 filtered, 100 exported, 95 preferred
//! ```
//!
//! Parsing is lexical: whitespace is normalized, rows are split into fixed
//! token positions, and one bad row fails the whole report.

pub mod detail;
pub mod error;
pub mod list;
pub mod model;
pub mod whitespace;

pub use detail::{parse_block, parse_blocks, parse_routes};
pub use error::{ParseError, Result};
pub use list::{parse_summaries, parse_summary_line};
pub use model::{ProtocolState, ProtocolSummary, Routes, SINCE_FORMAT};
pub use whitespace::{normalize_whitespace, Trim};
