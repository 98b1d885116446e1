use std::net::Ipv4Addr;

use serde::Serialize;

use super::layout;
use crate::protocols::common::{DecodeError, HeaderReader, Layer};

/// Decoded IPv4 header.
///
/// `header_len` is the IHL nibble in 32-bit words; it is reported as-is but
/// never varies how many bytes are consumed (options are out of scope, the
/// fixed 20-byte header is always taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ipv4Header {
    pub version: u8,
    pub header_len: u8,
    pub dscp: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags: u8,
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

/// Decode an IPv4 header from the bytes following the Ethernet header.
pub fn decode_ipv4(bytes: &[u8]) -> Result<(Ipv4Header, &[u8]), DecodeError> {
    let reader = HeaderReader::new(Layer::Ipv4, bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let version_ihl = reader.read_u8(layout::VERSION_IHL_OFFSET)?;
    let flags_fragment = reader.read_u16_be(layout::FLAGS_FRAGMENT_RANGE.clone())?;

    let header = Ipv4Header {
        version: version_ihl >> 4,
        header_len: version_ihl & 0x0f,
        dscp: reader.read_u8(layout::DSCP_OFFSET)?,
        total_length: reader.read_u16_be(layout::TOTAL_LENGTH_RANGE.clone())?,
        identification: reader.read_u16_be(layout::IDENTIFICATION_RANGE.clone())?,
        flags: (flags_fragment >> 13) as u8,
        fragment_offset: flags_fragment & 0x1fff,
        ttl: reader.read_u8(layout::TTL_OFFSET)?,
        protocol: reader.read_u8(layout::PROTOCOL_OFFSET)?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE.clone())?,
        source: Ipv4Addr::from(reader.read_array::<4>(layout::SOURCE_OFFSET)?),
        destination: Ipv4Addr::from(reader.read_array::<4>(layout::DESTINATION_OFFSET)?),
    };
    let payload = reader.rest(layout::HEADER_LEN)?;

    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::decode_ipv4;
    use crate::protocols::common::{DecodeError, Layer};

    #[test]
    fn decode_valid_header() {
        let bytes = [
            0x45, // version 4, IHL 5
            0x00, // DSCP
            0x00, 0x28, // total length: 40
            0x12, 0x34, // identification
            0x40, 0x00, // flags: don't fragment, offset 0
            0x40, // TTL: 64
            0x06, // protocol: TCP
            0xbe, 0xef, // checksum (not verified)
            0xc0, 0xa8, 0x01, 0x01, // source: 192.168.1.1
            0xc0, 0xa8, 0x01, 0x02, // destination: 192.168.1.2
            0xaa, 0xbb, // payload
        ];

        let (header, payload) = decode_ipv4(&bytes).unwrap();
        assert_eq!(header.version, 4);
        assert_eq!(header.header_len, 5);
        assert_eq!(header.total_length, 40);
        assert_eq!(header.identification, 0x1234);
        assert_eq!(header.flags, 0b010);
        assert_eq!(header.fragment_offset, 0);
        assert_eq!(header.ttl, 64);
        assert_eq!(header.protocol, 6);
        assert_eq!(header.checksum, 0xbeef);
        assert_eq!(header.source, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(header.destination, Ipv4Addr::new(192, 168, 1, 2));
        assert_eq!(payload, &[0xaa, 0xbb]);
    }

    #[test]
    fn header_len_nibble_matches_low_bits_of_first_byte() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0x4f; // IHL 15, still only 20 bytes consumed
        let (header, payload) = decode_ipv4(&bytes).unwrap();
        assert_eq!(header.header_len, bytes[0] & 0x0f);
        assert!(payload.is_empty());
    }

    #[test]
    fn fragment_offset_spans_13_bits() {
        let mut bytes = [0u8; 20];
        bytes[6] = 0xff;
        bytes[7] = 0xff;
        let (header, _) = decode_ipv4(&bytes).unwrap();
        assert_eq!(header.flags, 0b111);
        assert_eq!(header.fragment_offset, 0x1fff);
    }

    #[test]
    fn decode_short_header() {
        let bytes = [0x45; 19];
        let err = decode_ipv4(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedHeader {
                layer: Layer::Ipv4,
                needed: 20,
                actual: 19,
            }
        );
    }
}
