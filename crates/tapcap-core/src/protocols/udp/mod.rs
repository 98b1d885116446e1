pub mod layout;
pub mod parser;

pub use parser::{UdpHeader, decode_udp};
