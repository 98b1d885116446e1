pub mod error;
pub mod reader;

pub use error::{DecodeError, Layer};
pub use reader::HeaderReader;
