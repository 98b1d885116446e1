use serde::Serialize;

use super::layout;
use crate::protocols::common::{DecodeError, HeaderReader, Layer};

/// Decoded ICMP header, always 8 bytes.
///
/// `rest_of_header` carries the 4 type-specific bytes (identifier/sequence
/// for echo, unused/MTU for unreachable, ...) without interpreting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IcmpHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub rest_of_header: [u8; 4],
}

impl IcmpHeader {
    /// Human-readable name for well-known message types.
    pub fn type_name(&self) -> Option<&'static str> {
        match self.icmp_type {
            layout::TYPE_ECHO_REPLY => Some("echo reply"),
            layout::TYPE_DEST_UNREACHABLE => Some("destination unreachable"),
            layout::TYPE_ECHO_REQUEST => Some("echo request"),
            layout::TYPE_TIME_EXCEEDED => Some("time exceeded"),
            _ => None,
        }
    }
}

/// Decode an ICMP header from the bytes following the IPv4 header.
pub fn decode_icmp(bytes: &[u8]) -> Result<(IcmpHeader, &[u8]), DecodeError> {
    let reader = HeaderReader::new(Layer::Icmp, bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let header = IcmpHeader {
        icmp_type: reader.read_u8(layout::TYPE_OFFSET)?,
        code: reader.read_u8(layout::CODE_OFFSET)?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE.clone())?,
        rest_of_header: reader.read_array(layout::REST_OF_HEADER_OFFSET)?,
    };
    let payload = reader.rest(layout::HEADER_LEN)?;

    Ok((header, payload))
}
