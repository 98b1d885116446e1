//! Protocol header decoders.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `parser`: typed header record plus a `decode_*` function returning the
//!   header and the remaining payload slice
//!
//! Shared pieces live in `common`: the bounds-checked `HeaderReader` and
//! the `DecodeError`/`Layer` types. Decoders are pure, contain no I/O, and
//! check nothing beyond length — checksums and options are out of scope.

pub(crate) mod common;
pub mod ethernet;
pub mod icmp;
pub mod ipv4;
pub mod tcp;
pub mod udp;

pub use common::{DecodeError, Layer};
