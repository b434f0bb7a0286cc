pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

pub mod endian;
pub use endian::{Endian, HOST};

pub mod order;
pub use order::Order;

pub mod swap;
pub use swap::{swap_bytes, ByteSwap};

pub mod traits;
pub use traits::ByteCast;
