//! Frame pipeline: drives one raw frame through the decoder chain.

use serde::Serialize;

use crate::dispatch::{EtherKind, TransportKind, classify_ether_type, classify_ip_protocol};
use crate::protocols::common::Layer;
use crate::protocols::ethernet::{EthernetHeader, decode_ethernet};
use crate::protocols::icmp::{IcmpHeader, decode_icmp};
use crate::protocols::ipv4::{Ipv4Header, decode_ipv4};
use crate::protocols::tcp::{TcpHeader, decode_tcp};
use crate::protocols::udp::{UdpHeader, decode_udp};

/// Transport header variants; at most one is present per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportHeader {
    Tcp(TcpHeader),
    Udp(UdpHeader),
    Icmp(IcmpHeader),
}

/// Composite record for one raw frame: whichever headers decoded, in
/// order, plus the residual undecoded payload.
///
/// `truncated` names the layer whose bytes ran short, if any; decoding
/// that stopped on an unknown classification value leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFrame<'a> {
    pub ethernet: Option<EthernetHeader>,
    pub ipv4: Option<Ipv4Header>,
    pub transport: Option<TransportHeader>,
    pub truncated: Option<Layer>,
    #[serde(serialize_with = "serialize_payload_len", rename = "payload_len")]
    pub payload: &'a [u8],
}

fn serialize_payload_len<S: serde::Serializer>(
    payload: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(payload.len() as u64)
}

impl DecodedFrame<'_> {
    /// Whether any layer decoded at all.
    pub fn is_empty(&self) -> bool {
        self.ethernet.is_none()
    }
}

/// Decode one raw link-layer frame.
///
/// Never fails: a truncated layer yields a partial record flagged with the
/// failing layer, and an unrecognized classification value stops decoding
/// cleanly. Pure and side-effect free, so callers may fan it out across
/// workers freely.
pub fn decode_frame(raw: &[u8]) -> DecodedFrame<'_> {
    let mut frame = DecodedFrame {
        ethernet: None,
        ipv4: None,
        transport: None,
        truncated: None,
        payload: raw,
    };

    let rest = match decode_ethernet(raw) {
        Ok((header, rest)) => {
            frame.ethernet = Some(header);
            frame.payload = rest;
            rest
        }
        Err(err) => {
            log::debug!("frame dropped at link layer: {err}");
            frame.truncated = Some(err.layer());
            return frame;
        }
    };

    let ether_type = frame.ethernet.as_ref().map(|eth| eth.ether_type);
    match ether_type.and_then(classify_ether_type) {
        Some(EtherKind::Ipv4) => {}
        Some(kind) => {
            log::trace!("stopping after link layer: {} not decoded", kind.name());
            return frame;
        }
        None => {
            log::debug!("unknown ether-type {:#06x}", ether_type.unwrap_or_default());
            return frame;
        }
    }

    let rest = match decode_ipv4(rest) {
        Ok((header, rest)) => {
            frame.ipv4 = Some(header);
            frame.payload = rest;
            rest
        }
        Err(err) => {
            log::debug!("partial frame: {err}");
            frame.truncated = Some(err.layer());
            return frame;
        }
    };

    let protocol = frame.ipv4.as_ref().map(|ip| ip.protocol).unwrap_or_default();
    let transport = match classify_ip_protocol(protocol) {
        Some(TransportKind::Tcp) => decode_tcp(rest)
            .map(|(header, rest)| (TransportHeader::Tcp(header), rest)),
        Some(TransportKind::Udp) => decode_udp(rest)
            .map(|(header, rest)| (TransportHeader::Udp(header), rest)),
        Some(TransportKind::Icmp) => decode_icmp(rest)
            .map(|(header, rest)| (TransportHeader::Icmp(header), rest)),
        Some(TransportKind::Igmp) => {
            log::trace!("stopping after network layer: IGMP not decoded");
            return frame;
        }
        None => {
            log::debug!("unknown IP protocol {protocol}");
            return frame;
        }
    };

    match transport {
        Ok((header, rest)) => {
            frame.transport = Some(header);
            frame.payload = rest;
        }
        Err(err) => {
            log::debug!("partial frame: {err}");
            frame.truncated = Some(err.layer());
        }
    }

    frame
}
