use std::fmt;

use paste::paste;

use crate::order::Order;
use crate::swap::ByteSwap;

mod private {
    pub trait Sealed {}
}

/// Fixed-width numerics that can be stored in a declared byte order.
///
/// Implemented for the 2, 4 and 8 byte integers and floats only; the trait
/// is sealed so no other width can be named as a stored type.
pub trait ByteCast:
    ByteSwap
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    const SIZEOF: usize;
    const SIGNED: bool;

    /// In-memory image, `[u8; SIZEOF]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + Eq + fmt::Debug;

    fn from_bytes<O: Order>(buf: &[u8]) -> Self;
    fn into_bytes<O: Order>(&self, buf: &mut [u8]);

    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_for {
    ($t:ident, $read:ident, $write:ident, $signed:ident) => {
        impl private::Sealed for $t {}

        impl ByteCast for $t {
            const SIZEOF: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            type Bytes = [u8; std::mem::size_of::<$t>()];

            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                O::$read(buf)
            }

            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                O::$write(buf, *self)
            }

            #[inline(always)]
            fn to_ne_bytes(self) -> Self::Bytes {
                $t::to_ne_bytes(self)
            }

            #[inline(always)]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                $t::from_ne_bytes(bytes)
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*], $signed:ident) => {
        $(
            paste! {
                impl_for!($tname, [<read_ $tname>], [<write_ $tname>], $signed);
            }
        )*
    };
}

impls_for! { [i16, i32, i64, f32, f64], true }
impls_for! { [u16, u32, u64], false }
