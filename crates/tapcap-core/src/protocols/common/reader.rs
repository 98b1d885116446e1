use super::error::{DecodeError, Layer};

/// Bounds-checked reader over one header's bytes.
///
/// Network byte order throughout; every accessor reports the layer it was
/// created for so truncation errors name the failing protocol.
pub struct HeaderReader<'a> {
    layer: Layer,
    bytes: &'a [u8],
}

impl<'a> HeaderReader<'a> {
    pub fn new(layer: Layer, bytes: &'a [u8]) -> Self {
        Self { layer, bytes }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.bytes.len() < needed {
            return Err(DecodeError::TruncatedHeader {
                layer: self.layer,
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(DecodeError::TruncatedHeader {
                layer: self.layer,
                needed: offset + 1,
                actual: self.bytes.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(range)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, DecodeError> {
        let bytes = self.read_slice(range)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(offset..offset + N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.bytes
            .get(range.clone())
            .ok_or(DecodeError::TruncatedHeader {
                layer: self.layer,
                needed: range.end,
                actual: self.bytes.len(),
            })
    }

    /// Bytes after the fixed header, i.e. the next layer's input.
    pub fn rest(&self, from: usize) -> Result<&'a [u8], DecodeError> {
        self.require_len(from)?;
        Ok(&self.bytes[from..])
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderReader;
    use crate::protocols::common::error::{DecodeError, Layer};

    #[test]
    fn read_u16_be_network_order() {
        let bytes = [0x12, 0x34];
        let reader = HeaderReader::new(Layer::Ethernet, &bytes);
        assert_eq!(reader.read_u16_be(0..2).unwrap(), 0x1234);
    }

    #[test]
    fn read_u32_be_network_order() {
        let bytes = [0xde, 0xad, 0xbe, 0xef];
        let reader = HeaderReader::new(Layer::Tcp, &bytes);
        assert_eq!(reader.read_u32_be(0..4).unwrap(), 0xdead_beef);
    }

    #[test]
    fn read_past_end_reports_layer() {
        let bytes = [0u8; 3];
        let reader = HeaderReader::new(Layer::Udp, &bytes);
        let err = reader.read_u32_be(0..4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedHeader {
                layer: Layer::Udp,
                needed: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn rest_returns_tail() {
        let bytes = [1, 2, 3, 4, 5];
        let reader = HeaderReader::new(Layer::Udp, &bytes);
        assert_eq!(reader.rest(3).unwrap(), &[4, 5]);
    }

    #[test]
    fn rest_past_end_is_truncated() {
        let bytes = [1, 2];
        let reader = HeaderReader::new(Layer::Icmp, &bytes);
        assert!(matches!(
            reader.rest(8),
            Err(DecodeError::TruncatedHeader { .. })
        ));
    }
}
