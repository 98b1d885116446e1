pub mod layout;
pub mod parser;

pub use parser::{TcpHeader, decode_tcp};
