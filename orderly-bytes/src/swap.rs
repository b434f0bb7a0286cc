/// Reverses a 2, 4 or 8 byte image.
///
/// Any other width has no defined byte-swapped form and panics rather than
/// produce a misordered value.
#[inline(always)]
pub fn swap_bytes<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    assert!(
        matches!(N, 2 | 4 | 8),
        "byte swap is only defined for 2, 4 and 8 byte values, not {} bytes",
        N
    );
    bytes.reverse();
    bytes
}

/// Values whose byte sequence can be reversed.
pub trait ByteSwap: Copy {
    fn byte_swap(self) -> Self;
}

macro_rules! impl_for {
    ($t:ident) => {
        impl ByteSwap for $t {
            #[inline(always)]
            fn byte_swap(self) -> Self {
                // floats pass through `to_bits`, so NaN payloads survive
                $t::from_ne_bytes(swap_bytes(self.to_ne_bytes()))
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*]) => {
        $(
            impl_for!($tname);
        )*
    };
}

impls_for! { [i16, i32, i64, u16, u32, u64, f32, f64] }
