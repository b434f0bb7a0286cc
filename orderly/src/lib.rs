//! Numeric values stored in a declared byte order.
//!
//! A [`Value<T, O>`](Value) keeps the bytes of `T` in order `O` (big or
//! little endian) whatever the host order is, while reading and writing
//! like a plain `T`. Embedding these in `#[repr(C)]` records gives the exact
//! wire or file layout with no conversion calls at the use sites.

pub use orderly_bytes as bytes;
pub use orderly_bytes::{ByteCast, ByteSwap, Endian, Order, BE, HOST, LE, NE};

pub mod aliases;
pub use aliases::*;

pub mod error;
pub use error::Error;

pub mod ops;

pub mod value;
pub use value::Value;
