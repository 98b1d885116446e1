pub const DESTINATION_OFFSET: usize = 0;
pub const SOURCE_OFFSET: usize = 6;
pub const ETHER_TYPE_RANGE: std::ops::Range<usize> = 12..14;

pub const HEADER_LEN: usize = 14;
pub const MAC_LEN: usize = 6;
