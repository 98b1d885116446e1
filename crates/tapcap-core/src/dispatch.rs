//! Protocol classification tables.
//!
//! Classification is data, not logic: each layer has an immutable table
//! mapping the numeric identifier to a kind, and new protocols are added
//! as entries. Lookups return `None` for unknown values — an unmapped
//! identifier stops decoding at that layer and is never an error.

use serde::Serialize;

/// Network-layer protocols recognized in the Ethernet ether-type field.
///
/// Recognized does not mean decoded: IPv6 and ARP are classified so the
/// frame record can name them, then decoding stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EtherKind {
    Ipv4,
    Ipv6,
    Arp,
}

impl EtherKind {
    pub fn name(&self) -> &'static str {
        match self {
            EtherKind::Ipv4 => "IPv4",
            EtherKind::Ipv6 => "IPv6",
            EtherKind::Arp => "ARP",
        }
    }
}

/// Transport-layer protocols recognized in the IPv4 protocol field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportKind {
    Icmp,
    Igmp,
    Tcp,
    Udp,
}

impl TransportKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransportKind::Icmp => "ICMP",
            TransportKind::Igmp => "IGMP",
            TransportKind::Tcp => "TCP",
            TransportKind::Udp => "UDP",
        }
    }
}

pub const ETHER_TYPES: &[(u16, EtherKind)] = &[
    (0x0800, EtherKind::Ipv4),
    (0x0806, EtherKind::Arp),
    (0x86dd, EtherKind::Ipv6),
];

pub const IP_PROTOCOLS: &[(u8, TransportKind)] = &[
    (1, TransportKind::Icmp),
    (2, TransportKind::Igmp),
    (6, TransportKind::Tcp),
    (17, TransportKind::Udp),
];

/// Classify an ether-type value; `None` for anything not in the table.
pub fn classify_ether_type(value: u16) -> Option<EtherKind> {
    ETHER_TYPES
        .iter()
        .find(|(ether_type, _)| *ether_type == value)
        .map(|(_, kind)| *kind)
}

/// Classify an IPv4 protocol number; `None` for anything not in the table.
pub fn classify_ip_protocol(value: u8) -> Option<TransportKind> {
    IP_PROTOCOLS
        .iter()
        .find(|(number, _)| *number == value)
        .map(|(_, kind)| *kind)
}

/// Name for a known IPv4 protocol number.
pub fn ip_protocol_name(value: u8) -> Option<&'static str> {
    classify_ip_protocol(value).map(|kind| kind.name())
}

#[cfg(test)]
mod tests {
    use super::{EtherKind, TransportKind, classify_ether_type, classify_ip_protocol};

    #[test]
    fn known_ether_types() {
        assert_eq!(classify_ether_type(0x0800), Some(EtherKind::Ipv4));
        assert_eq!(classify_ether_type(0x0806), Some(EtherKind::Arp));
        assert_eq!(classify_ether_type(0x86dd), Some(EtherKind::Ipv6));
    }

    #[test]
    fn unknown_ether_type_is_none() {
        assert_eq!(classify_ether_type(0x8100), None); // VLAN, not in the table
    }

    #[test]
    fn known_ip_protocols() {
        assert_eq!(classify_ip_protocol(1), Some(TransportKind::Icmp));
        assert_eq!(classify_ip_protocol(2), Some(TransportKind::Igmp));
        assert_eq!(classify_ip_protocol(6), Some(TransportKind::Tcp));
        assert_eq!(classify_ip_protocol(17), Some(TransportKind::Udp));
    }

    #[test]
    fn unknown_ip_protocol_is_none() {
        assert_eq!(classify_ip_protocol(47), None); // GRE
        assert_eq!(super::ip_protocol_name(47), None);
    }
}
