use std::time::Duration;

use birdctl_frame::{FrameConfig, DEFAULT_MAX_LINE_LEN};

/// Configuration for a daemon connection.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for each blocking read. `None` blocks indefinitely.
    pub read_timeout: Option<Duration>,
    /// Deadline for each blocking write. `None` blocks indefinitely.
    pub write_timeout: Option<Duration>,
    /// Longest reply line accepted, newline included.
    pub max_line_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_timeout: Some(Duration::from_secs(5)),
            write_timeout: Some(Duration::from_secs(5)),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ClientConfig {
    /// Same deadline for reads and writes.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            read_timeout: Some(timeout),
            write_timeout: Some(timeout),
            ..Self::default()
        }
    }

    pub(crate) fn frame_config(&self) -> FrameConfig {
        FrameConfig {
            max_line_len: self.max_line_len,
            read_timeout: self.read_timeout,
            write_timeout: self.write_timeout,
        }
    }
}
