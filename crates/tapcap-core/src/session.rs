//! Capture session: the blocking pull loop and the frame buffer it owns.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::pipeline::{DecodedFrame, decode_frame};
use crate::source::{FrameSource, RawFrame, SourceError};

/// Append-only store of raw frames for one capture session.
///
/// Owned by the session loop and handed to the archive writer at session
/// end; nothing else mutates it.
#[derive(Debug, Default)]
pub struct CaptureBuffer {
    frames: Vec<RawFrame>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: RawFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in capture order.
    pub fn frames(&self) -> &[RawFrame] {
        &self.frames
    }
}

/// Counters reported once the capture loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub frames_total: u64,
    pub frames_truncated: u64,
}

/// Run the capture loop until the stop flag is raised, the source is
/// exhausted, or the optional frame limit is reached.
///
/// Each frame is decoded, handed to `observer`, and appended to the
/// returned buffer. Per-frame decode failures never end the loop; only a
/// `SourceError` from the source does.
pub fn run_session<S, F>(
    source: &mut S,
    stop: &AtomicBool,
    limit: Option<u64>,
    mut observer: F,
) -> Result<(CaptureBuffer, SessionSummary), SourceError>
where
    S: FrameSource,
    F: FnMut(&DecodedFrame<'_>),
{
    let mut buffer = CaptureBuffer::new();
    let mut summary = SessionSummary::default();

    while !stop.load(Ordering::Relaxed) {
        if limit.is_some_and(|max| summary.frames_total >= max) {
            break;
        }

        let frame = match source.next_frame()? {
            Some(frame) => frame,
            None => break,
        };

        let decoded = decode_frame(&frame.data);
        summary.frames_total += 1;
        if decoded.truncated.is_some() {
            summary.frames_truncated += 1;
        }
        observer(&decoded);
        buffer.push(frame);
    }

    log::info!(
        "capture ended: {} frames, {} truncated",
        summary.frames_total,
        summary.frames_truncated
    );
    Ok((buffer, summary))
}
