use paste::paste;
use static_assertions::{assert_eq_align, assert_eq_size};

use orderly_bytes::{BE, LE};

use crate::value::Value;

/// A `T` stored least significant byte first.
pub type LittleEndian<T> = Value<T, LE>;

/// A `T` stored most significant byte first.
pub type BigEndian<T> = Value<T, BE>;

macro_rules! aliases_for {
    ($($t:ident),*) => {
        $(
            paste! {
                #[doc = "A `" $t "` stored little-endian."]
                pub type [<$t:upper LE>] = Value<$t, LE>;

                #[doc = "A `" $t "` stored big-endian."]
                pub type [<$t:upper BE>] = Value<$t, BE>;

                assert_eq_size!([<$t:upper LE>], $t);
                assert_eq_size!([<$t:upper BE>], $t);
                assert_eq_align!([<$t:upper LE>], $t);
                assert_eq_align!([<$t:upper BE>], $t);
            }
        )*
    };
}

aliases_for!(i16, i32, i64, u16, u32, u64, f32, f64);
