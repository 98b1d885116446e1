use serde::Serialize;

use super::layout;
use crate::protocols::common::{DecodeError, HeaderReader, Layer};

/// 48-bit hardware address, displayed as lowercase `aa:bb:cc:dd:ee:ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddr(pub [u8; layout::MAC_LEN]);

impl std::fmt::Display for MacAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decoded Ethernet II header, always 14 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EthernetHeader {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ether_type: u16,
}

/// Decode the frame's Ethernet header, returning it with the payload that
/// follows the fixed 14 bytes.
pub fn decode_ethernet(frame: &[u8]) -> Result<(EthernetHeader, &[u8]), DecodeError> {
    let reader = HeaderReader::new(Layer::Ethernet, frame);
    reader.require_len(layout::HEADER_LEN)?;

    let destination = MacAddr(reader.read_array(layout::DESTINATION_OFFSET)?);
    let source = MacAddr(reader.read_array(layout::SOURCE_OFFSET)?);
    let ether_type = reader.read_u16_be(layout::ETHER_TYPE_RANGE.clone())?;
    let payload = reader.rest(layout::HEADER_LEN)?;

    Ok((
        EthernetHeader {
            destination,
            source,
            ether_type,
        },
        payload,
    ))
}

#[cfg(test)]
mod tests {
    use super::{MacAddr, decode_ethernet};
    use crate::protocols::common::{DecodeError, Layer};

    #[test]
    fn decode_valid_frame() {
        let frame = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // destination: broadcast
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // source
            0x08, 0x00, // ether-type: IPv4
            0x45, 0x00, // payload
        ];

        let (header, payload) = decode_ethernet(&frame).unwrap();
        assert_eq!(header.destination, MacAddr([0xff; 6]));
        assert_eq!(
            header.source,
            MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55])
        );
        assert_eq!(header.ether_type, 0x0800);
        assert_eq!(payload, &[0x45, 0x00]);
    }

    #[test]
    fn decode_short_frame() {
        let frame = [0u8; 13];
        let err = decode_ethernet(&frame).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedHeader {
                layer: Layer::Ethernet,
                needed: 14,
                actual: 13,
            }
        );
    }

    #[test]
    fn decode_exact_header_leaves_empty_payload() {
        let mut frame = [0u8; 14];
        frame[12] = 0x08;
        frame[13] = 0x06;

        let (header, payload) = decode_ethernet(&frame).unwrap();
        assert_eq!(header.ether_type, 0x0806);
        assert!(payload.is_empty());
    }

    #[test]
    fn mac_displays_lowercase_colon_separated() {
        let mac = MacAddr([0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]);
        assert_eq!(mac.to_string(), "0a:0b:0c:0d:0e:0f");
    }
}
