use serde::Serialize;

use super::layout;
use crate::protocols::common::{DecodeError, HeaderReader, Layer};

/// Decoded UDP header, always 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
}

/// Decode a UDP header from the bytes following the IPv4 header.
pub fn decode_udp(bytes: &[u8]) -> Result<(UdpHeader, &[u8]), DecodeError> {
    let reader = HeaderReader::new(Layer::Udp, bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let header = UdpHeader {
        source_port: reader.read_u16_be(layout::SOURCE_PORT_RANGE.clone())?,
        destination_port: reader.read_u16_be(layout::DESTINATION_PORT_RANGE.clone())?,
        length: reader.read_u16_be(layout::LENGTH_RANGE.clone())?,
        checksum: reader.read_u16_be(layout::CHECKSUM_RANGE.clone())?,
    };
    let payload = reader.rest(layout::HEADER_LEN)?;

    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use super::decode_udp;
    use crate::protocols::common::{DecodeError, Layer};

    #[test]
    fn decode_valid_header() {
        let bytes = [
            0x00, 0x35, // source port: 53
            0x30, 0x39, // destination port: 12345
            0x00, 0x0c, // length: 12
            0xab, 0xcd, // checksum (not verified)
            0xde, 0xad, 0xbe, 0xef, // payload
        ];

        let (header, payload) = decode_udp(&bytes).unwrap();
        assert_eq!(header.source_port, 53);
        assert_eq!(header.destination_port, 12345);
        assert_eq!(header.length, 12);
        assert_eq!(header.checksum, 0xabcd);
        assert_eq!(payload, &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_short_header() {
        let bytes = [0u8; 7];
        let err = decode_udp(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedHeader {
                layer: Layer::Udp,
                needed: 8,
                actual: 7,
            }
        );
    }
}
