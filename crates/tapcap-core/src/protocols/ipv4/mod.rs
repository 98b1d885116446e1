pub mod layout;
pub mod parser;

pub use parser::{Ipv4Header, decode_ipv4};
