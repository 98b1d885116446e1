pub const VERSION_IHL_OFFSET: usize = 0;
pub const DSCP_OFFSET: usize = 1;
pub const TOTAL_LENGTH_RANGE: std::ops::Range<usize> = 2..4;
pub const IDENTIFICATION_RANGE: std::ops::Range<usize> = 4..6;
pub const FLAGS_FRAGMENT_RANGE: std::ops::Range<usize> = 6..8;
pub const TTL_OFFSET: usize = 8;
pub const PROTOCOL_OFFSET: usize = 9;
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 10..12;
pub const SOURCE_OFFSET: usize = 12;
pub const DESTINATION_OFFSET: usize = 16;

/// Options are not decoded; consumption is always the minimum header.
pub const HEADER_LEN: usize = 20;
