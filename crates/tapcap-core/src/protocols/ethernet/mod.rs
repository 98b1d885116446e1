pub mod layout;
pub mod parser;

pub use parser::{EthernetHeader, MacAddr, decode_ethernet};
