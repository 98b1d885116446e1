//! tapcap core library: live link-layer frame decoding.
//!
//! The capture loop pulls raw frames from a [`FrameSource`], drives each
//! one through the decoder pipeline (Ethernet → IPv4 → TCP/UDP/ICMP), and
//! buffers the original bytes for archival at session end. Decoding is
//! byte-oriented and side-effect free; all I/O is isolated in `source` and
//! `archive`. Protocol byte layouts are captured in per-protocol `layout`
//! modules so parsers never index bytes directly.
//!
//! Invariants:
//! - Decoders consume fixed header sizes and validate nothing but length.
//! - A malformed frame yields a partial record, never an aborted session.
//! - Unknown classification values stop decoding at that layer silently.
//!
//! # Examples
//! ```
//! use tapcap_core::decode_frame;
//!
//! // 14 Ethernet bytes carrying an unknown ether-type: link layer only.
//! let raw = [0u8; 14];
//! let frame = decode_frame(&raw);
//! assert!(frame.ethernet.is_some());
//! assert!(frame.ipv4.is_none());
//! ```

mod archive;
mod dispatch;
mod pipeline;
mod protocols;
mod session;
mod source;

pub use archive::{ArchiveError, write_capture};
pub use dispatch::{
    EtherKind, TransportKind, classify_ether_type, classify_ip_protocol, ip_protocol_name,
};
pub use pipeline::{DecodedFrame, TransportHeader, decode_frame};
pub use protocols::ethernet::{EthernetHeader, MacAddr, decode_ethernet};
pub use protocols::icmp::{IcmpHeader, decode_icmp};
pub use protocols::ipv4::{Ipv4Header, decode_ipv4};
pub use protocols::tcp::{TcpHeader, decode_tcp};
pub use protocols::udp::{UdpHeader, decode_udp};
pub use protocols::{DecodeError, Layer};
pub use session::{CaptureBuffer, SessionSummary, run_session};
#[cfg(target_os = "linux")]
pub use source::RawSocketSource;
pub use source::{ANY_INTERFACE, FrameSource, MAX_FRAME_LEN, RawFrame, SourceError};
