//! Legacy pcap archive writer.
//!
//! The record layout is serialized byte-by-byte against the constants
//! below; readers agree as long as these stay the single source of truth.
//! All fields are little-endian, matching the 0xa1b2c3d4 magic.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::session::CaptureBuffer;
use crate::source::MAX_FRAME_LEN;

const MAGIC: u32 = 0xa1b2_c3d4;
const VERSION_MAJOR: u16 = 2;
const VERSION_MINOR: u16 = 4;
const LINKTYPE_ETHERNET: u32 = 1;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to write archive {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write all buffered frames, in capture order, as a legacy pcap file.
///
/// Returns `Ok(false)` without touching the filesystem when the buffer is
/// empty; an empty capture produces no archive.
pub fn write_capture(path: &Path, buffer: &CaptureBuffer) -> Result<bool, ArchiveError> {
    if buffer.is_empty() {
        return Ok(false);
    }

    let mut output = Vec::with_capacity(24 + buffer.frames().len() * 16);
    output.extend_from_slice(&MAGIC.to_le_bytes());
    output.extend_from_slice(&VERSION_MAJOR.to_le_bytes());
    output.extend_from_slice(&VERSION_MINOR.to_le_bytes());
    output.extend_from_slice(&0i32.to_le_bytes()); // thiszone
    output.extend_from_slice(&0u32.to_le_bytes()); // sigfigs
    output.extend_from_slice(&(MAX_FRAME_LEN as u32).to_le_bytes());
    output.extend_from_slice(&LINKTYPE_ETHERNET.to_le_bytes());

    for frame in buffer.frames() {
        let len = frame.data.len() as u32;
        output.extend_from_slice(&frame.ts_sec.to_le_bytes());
        output.extend_from_slice(&frame.ts_usec.to_le_bytes());
        output.extend_from_slice(&len.to_le_bytes()); // captured length
        output.extend_from_slice(&len.to_le_bytes()); // original length
        output.extend_from_slice(&frame.data);
    }

    fs::write(path, output).map_err(|source| ArchiveError::Io {
        path: path.display().to_string(),
        source,
    })?;

    log::info!(
        "archived {} frames -> {}",
        buffer.frames().len(),
        path.display()
    );
    Ok(true)
}
