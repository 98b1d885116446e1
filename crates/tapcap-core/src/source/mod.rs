#[cfg(target_os = "linux")]
mod raw;

#[cfg(target_os = "linux")]
pub use raw::RawSocketSource;

use thiserror::Error;

/// Largest link-layer frame a source may hand out.
pub const MAX_FRAME_LEN: usize = 65536;

/// Interface name sentinel meaning "capture on all interfaces".
pub const ANY_INTERFACE: &str = "any";

/// One raw frame as received from the capture source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub ts_sec: u32,
    pub ts_usec: u32,
    pub data: Vec<u8>,
}

impl RawFrame {
    /// Frame with the receipt timestamp taken now.
    pub fn now(data: Vec<u8>) -> Self {
        let now = time::OffsetDateTime::now_utc();
        Self {
            ts_sec: now.unix_timestamp().max(0) as u32,
            ts_usec: now.microsecond(),
            data,
        }
    }
}

/// Pull-based frame supplier driving the capture loop.
///
/// `Ok(None)` means no frame is available right now: the source is
/// exhausted, or a blocking read was interrupted. The loop decides whether
/// to stop or retry.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError>;
}

/// Errors from opening or reading a capture source.
///
/// `Privilege` and `NoSuchInterface` are setup failures: fatal, reported
/// before any capture, never retried.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("insufficient privilege to open capture socket")]
    Privilege(#[source] std::io::Error),
    #[error("no such interface: {name}")]
    NoSuchInterface { name: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
