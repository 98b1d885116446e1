use serde::Serialize;

use super::layout;
use crate::protocols::common::{DecodeError, HeaderReader, Layer};

/// Decoded TCP header.
///
/// `data_offset` is the header length in 32-bit words; like IPv4 it is
/// reported but never varies consumption (options are out of scope). All
/// six control bits are decoded individually; `flag_label` collapses them
/// to the single reported name, see below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TcpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence: u32,
    pub acknowledgment: u32,
    pub data_offset: u8,
    pub reserved: u8,
    pub urg: bool,
    pub ack: bool,
    pub psh: bool,
    pub rst: bool,
    pub syn: bool,
    pub fin: bool,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
}

impl TcpHeader {
    /// Single reported flag name, first match wins: FIN, else SYN, else
    /// RST, else PSH, else ACK, else URG.
    ///
    /// This exclusive chain is a preserved contract: a SYN+ACK segment
    /// reports only "SYN", and a segment with no control bits set reports
    /// "URG". Callers wanting the full picture read the six booleans.
    pub fn flag_label(&self) -> &'static str {
        if self.fin {
            "FIN"
        } else if self.syn {
            "SYN"
        } else if self.rst {
            "RST"
        } else if self.psh {
            "PSH"
        } else if self.ack {
            "ACK"
        } else {
            "URG"
        }
    }
}

/// Decode a TCP header from the bytes following the IPv4 header.
pub fn decode_tcp(bytes: &[u8]) -> Result<(TcpHeader, &[u8]), DecodeError> {
    let reader = HeaderReader::new(Layer::Tcp, bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let offset_flags = reader.read_u16_be(layout::OFFSET_FLAGS_RANGE.clone())?;

    let header = TcpHeader {
        source_port: reader.read_u16_be(layout::SOURCE_PORT_RANGE.clone())?,
        destination_port: reader.read_u16_be(layout::DESTINATION_PORT_RANGE.clone())?,
        sequence: reader.read_u32_be(layout::SEQUENCE_RANGE.clone())?,
        acknowledgment: reader.read_u32_be(layout::ACKNOWLEDGMENT_RANGE.clone())?,
        data_offset: (offset_flags >> 12) as u8,
        reserved: ((offset_flags >> 6) & 0x3f) as u8,
        urg: offset_flags & layout::FLAG_URG != 0,
        ack: offset_flags & layout::FLAG_ACK != 0,
        psh: offset_flags & layout::FLAG_PSH != 0,
        rst: offset_flags & layout::FLAG_RST != 0,
        syn: offset_flags & layout::FLAG_SYN != 0,
        fin: offset_flags & layout::FLAG_FIN != 0,
        window: reader.read_u16_be(layout::WINDOW_RANGE.clone())?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE.clone())?,
        urgent_pointer: reader.read_u16_be(layout::URGENT_POINTER_RANGE.clone())?,
    };
    let payload = reader.rest(layout::HEADER_LEN)?;

    Ok((header, payload))
}
