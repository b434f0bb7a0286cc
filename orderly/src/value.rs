use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_traits::AsPrimitive;
use orderly_bytes::{ByteCast, Endian, Order, BE, LE};

use crate::error::Error;

/// A `T` whose in-memory bytes are always in order `O`.
///
/// The stored image is `T` passed through [`Order::transform`], so it is
/// exactly the declared-order encoding on every host. Size and alignment
/// are those of `T`.
#[repr(transparent)]
pub struct Value<T: ByteCast, O: Order> {
    raw: T,
    marker: PhantomData<O>,
}

impl<T: ByteCast, O: Order> Value<T, O> {
    pub const WIDTH: usize = T::SIZEOF;

    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self::from_raw(O::transform(value))
    }

    /// Coerces `value` to `T` with `as` semantics (truncating, saturating
    /// or rounding as the native cast does) before storing it.
    #[inline]
    pub fn from_as<U: AsPrimitive<T>>(value: U) -> Self {
        Self::new(value.as_())
    }

    #[inline(always)]
    pub fn get(self) -> T {
        O::transform(self.raw)
    }

    /// Decodes the value and coerces it to `U` with `as` semantics.
    #[inline]
    pub fn to_as<U>(self) -> U
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.get().as_()
    }

    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.raw = O::transform(value);
    }

    pub fn replace(&mut self, value: T) -> T {
        let old = self.get();
        self.set(value);
        old
    }

    /// Re-encodes the same native value in another byte order.
    #[inline]
    pub fn convert<P: Order>(self) -> Value<T, P> {
        Value::new(self.get())
    }

    pub fn endian(&self) -> Endian {
        O::ENDIAN
    }

    /// The stored representation reinterpreted as a native `T`; this is the
    /// byte-swapped value whenever `O` is not the host order.
    #[inline(always)]
    pub fn raw(self) -> T {
        self.raw
    }

    #[inline(always)]
    pub fn from_raw(raw: T) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    /// The exact stored image, in declared order.
    #[inline]
    pub fn to_bytes(self) -> T::Bytes {
        self.raw.to_ne_bytes()
    }

    /// Adopts a declared-order image verbatim.
    #[inline]
    pub fn from_bytes(bytes: T::Bytes) -> Self {
        Self::from_raw(T::from_ne_bytes(bytes))
    }

    /// Reads a declared-order image from the front of `buf`.
    pub fn read_from(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < T::SIZEOF {
            log::trace!(
                "cannot read {} byte {} value from {} byte buffer",
                T::SIZEOF,
                O::ENDIAN,
                buf.len()
            );
            return Err(Error::BufferTooSmall {
                expected: T::SIZEOF,
                actual: buf.len(),
            });
        }
        Ok(Self::new(T::from_bytes::<O>(buf)))
    }

    /// Writes the declared-order image to the front of `buf`.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.len() < T::SIZEOF {
            log::trace!(
                "cannot write {} byte {} value to {} byte buffer",
                T::SIZEOF,
                O::ENDIAN,
                buf.len()
            );
            return Err(Error::BufferTooSmall {
                expected: T::SIZEOF,
                actual: buf.len(),
            });
        }
        self.get().into_bytes::<O>(buf);
        Ok(())
    }

    /// Like [`Value::read_from`], but `buf` must be exactly one image long.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() != T::SIZEOF {
            log::trace!(
                "{} byte slice is not a {} byte {} image",
                buf.len(),
                T::SIZEOF,
                O::ENDIAN
            );
            return Err(Error::Length {
                expected: T::SIZEOF,
                actual: buf.len(),
            });
        }
        Self::read_from(buf)
    }
}

impl<T: ByteCast, O: Order> Clone for Value<T, O> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ByteCast, O: Order> Copy for Value<T, O> {}

impl<T: ByteCast, O: Order> Default for Value<T, O> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ByteCast, O: Order> From<T> for Value<T, O> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ByteCast> From<Value<T, BE>> for Value<T, LE> {
    fn from(value: Value<T, BE>) -> Self {
        value.convert()
    }
}

impl<T: ByteCast> From<Value<T, LE>> for Value<T, BE> {
    fn from(value: Value<T, LE>) -> Self {
        value.convert()
    }
}

impl<T: ByteCast, O: Order, P: Order> PartialEq<Value<T, P>> for Value<T, O> {
    #[inline]
    fn eq(&self, other: &Value<T, P>) -> bool {
        self.get() == other.get()
    }
}

impl<T: ByteCast, O: Order, P: Order> PartialOrd<Value<T, P>> for Value<T, O> {
    #[inline]
    fn partial_cmp(&self, other: &Value<T, P>) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: ByteCast, O: Order> fmt::Debug for Value<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.get(), O::ENDIAN)
    }
}

impl<T: ByteCast, O: Order> fmt::Display for Value<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<T: ByteCast + fmt::LowerHex, O: Order> fmt::LowerHex for Value<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.get(), f)
    }
}

impl<T: ByteCast + fmt::UpperHex, O: Order> fmt::UpperHex for Value<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.get(), f)
    }
}

#[cfg(feature = "serde")]
impl<T, O> serde::Serialize for Value<T, O>
where
    T: ByteCast + serde::Serialize,
    O: Order,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.get(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for Value<T, O>
where
    T: ByteCast + serde::Deserialize<'de>,
    O: Order,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <T as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

macro_rules! impl_native_for {
    ($t:ident) => {
        impl<O: Order> From<Value<$t, O>> for $t {
            #[inline(always)]
            fn from(value: Value<$t, O>) -> Self {
                value.get()
            }
        }

        impl<O: Order> PartialEq<$t> for Value<$t, O> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.get() == *other
            }
        }

        impl<O: Order> PartialEq<Value<$t, O>> for $t {
            #[inline]
            fn eq(&self, other: &Value<$t, O>) -> bool {
                *self == other.get()
            }
        }

        impl<O: Order> PartialOrd<$t> for Value<$t, O> {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.get().partial_cmp(other)
            }
        }

        impl<O: Order> PartialOrd<Value<$t, O>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Value<$t, O>) -> Option<Ordering> {
                self.partial_cmp(&other.get())
            }
        }
    };
}

macro_rules! impls_native_for {
    ($($tname:ident),*) => {
        $(
            impl_native_for!($tname);
        )*
    };
}

// total order only exists for the integers
macro_rules! impl_total_for {
    ($t:ident) => {
        impl<O: Order> Eq for Value<$t, O> {}

        impl<O: Order> Ord for Value<$t, O> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                self.get().cmp(&other.get())
            }
        }

        impl<O: Order> Hash for Value<$t, O> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.get().hash(state)
            }
        }
    };
}

macro_rules! impls_total_for {
    ($($tname:ident),*) => {
        $(
            impl_total_for!($tname);
        )*
    };
}

impls_native_for!(i16, i32, i64, u16, u32, u64, f32, f64);
impls_total_for!(i16, i32, i64, u16, u32, u64);
