pub mod layout;
pub mod parser;

pub use parser::{IcmpHeader, decode_icmp};
