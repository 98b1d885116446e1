pub const SOURCE_PORT_RANGE: std::ops::Range<usize> = 0..2;
pub const DESTINATION_PORT_RANGE: std::ops::Range<usize> = 2..4;
pub const SEQUENCE_RANGE: std::ops::Range<usize> = 4..8;
pub const ACKNOWLEDGMENT_RANGE: std::ops::Range<usize> = 8..12;
pub const OFFSET_FLAGS_RANGE: std::ops::Range<usize> = 12..14;
pub const WINDOW_RANGE: std::ops::Range<usize> = 14..16;
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 16..18;
pub const URGENT_POINTER_RANGE: std::ops::Range<usize> = 18..20;

/// Options are not decoded; consumption is always the minimum header.
pub const HEADER_LEN: usize = 20;

pub const FLAG_URG: u16 = 0x20;
pub const FLAG_ACK: u16 = 0x10;
pub const FLAG_PSH: u16 = 0x08;
pub const FLAG_RST: u16 = 0x04;
pub const FLAG_SYN: u16 = 0x02;
pub const FLAG_FIN: u16 = 0x01;
