use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;
use crate::swap::ByteSwap;

pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;

    /// Moves a value between native and `Self` order. The same call encodes
    /// and decodes since the swap is its own inverse.
    #[inline(always)]
    fn transform<T: ByteSwap>(value: T) -> T {
        if Self::NATIVE {
            value
        } else {
            value.byte_swap()
        }
    }
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
    const NATIVE: bool = cfg!(target_endian = "big");
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
    const NATIVE: bool = cfg!(target_endian = "little");
}
