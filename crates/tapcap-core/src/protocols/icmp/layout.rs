pub const TYPE_OFFSET: usize = 0;
pub const CODE_OFFSET: usize = 1;
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 2..4;
pub const REST_OF_HEADER_OFFSET: usize = 4;

pub const HEADER_LEN: usize = 8;

pub const TYPE_ECHO_REPLY: u8 = 0;
pub const TYPE_DEST_UNREACHABLE: u8 = 3;
pub const TYPE_ECHO_REQUEST: u8 = 8;
pub const TYPE_TIME_EXCEEDED: u8 = 11;
