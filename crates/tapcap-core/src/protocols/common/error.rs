use serde::Serialize;
use thiserror::Error;

/// Protocol layer a decoder operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Ethernet,
    Ipv4,
    Tcp,
    Udp,
    Icmp,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Layer::Ethernet => "Ethernet",
            Layer::Ipv4 => "IPv4",
            Layer::Tcp => "TCP",
            Layer::Udp => "UDP",
            Layer::Icmp => "ICMP",
        };
        f.write_str(name)
    }
}

/// Errors returned by header decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{layer} header truncated: need {needed} bytes, got {actual}")]
    TruncatedHeader {
        layer: Layer,
        needed: usize,
        actual: usize,
    },
}

impl DecodeError {
    /// Layer at which decoding failed.
    pub fn layer(&self) -> Layer {
        match self {
            DecodeError::TruncatedHeader { layer, .. } => *layer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, Layer};

    #[test]
    fn truncated_header_message_names_layer() {
        let err = DecodeError::TruncatedHeader {
            layer: Layer::Ipv4,
            needed: 20,
            actual: 7,
        };
        assert_eq!(err.layer(), Layer::Ipv4);
        assert_eq!(err.to_string(), "IPv4 header truncated: need 20 bytes, got 7");
    }
}
