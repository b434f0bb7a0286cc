//! Compound assignment and increment/decrement.
//!
//! Every operation decodes to the native value, applies the native operator
//! and stores the result, so overflow, division by zero and oversized shifts
//! behave exactly as they do for `T` itself.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use num_traits::One;
use orderly_bytes::{ByteCast, Order};

use crate::value::Value;

macro_rules! impl_assign_op {
    ($assign:ident, $assign_fn:ident, $op:ident, $op_fn:ident) => {
        impl<T, O> $assign<T> for Value<T, O>
        where
            T: ByteCast + $op<Output = T>,
            O: Order,
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: T) {
                self.set(self.get().$op_fn(rhs));
            }
        }

        impl<T, O, P> $assign<Value<T, P>> for Value<T, O>
        where
            T: ByteCast + $op<Output = T>,
            O: Order,
            P: Order,
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: Value<T, P>) {
                self.set(self.get().$op_fn(rhs.get()));
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, Add, add);
impl_assign_op!(SubAssign, sub_assign, Sub, sub);
impl_assign_op!(MulAssign, mul_assign, Mul, mul);
impl_assign_op!(DivAssign, div_assign, Div, div);
impl_assign_op!(RemAssign, rem_assign, Rem, rem);
impl_assign_op!(BitAndAssign, bitand_assign, BitAnd, bitand);
impl_assign_op!(BitOrAssign, bitor_assign, BitOr, bitor);
impl_assign_op!(BitXorAssign, bitxor_assign, BitXor, bitxor);
impl_assign_op!(ShlAssign, shl_assign, Shl, shl);
impl_assign_op!(ShrAssign, shr_assign, Shr, shr);

impl<T, O> Value<T, O>
where
    T: ByteCast + Add<Output = T> + One,
    O: Order,
{
    /// Prefix increment: adds one and returns the updated value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        *self += T::one();
        *self
    }

    /// Postfix increment: adds one and returns the native value from before.
    #[inline]
    pub fn post_increment(&mut self) -> T {
        let old = self.get();
        *self += T::one();
        old
    }
}

impl<T, O> Value<T, O>
where
    T: ByteCast + Sub<Output = T> + One,
    O: Order,
{
    /// Prefix decrement: subtracts one and returns the updated value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        *self -= T::one();
        *self
    }

    /// Postfix decrement: subtracts one and returns the native value from
    /// before.
    #[inline]
    pub fn post_decrement(&mut self) -> T {
        let old = self.get();
        *self -= T::one();
        old
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use orderly_bytes::{BE, LE};

    fn fidelity<T, O>(start: T, rhs: T, native: fn(&mut T, T), wrapped: fn(&mut Value<T, O>, T))
    where
        T: ByteCast,
        O: Order,
    {
        let mut expected = start;
        native(&mut expected, rhs);

        let mut v = Value::<T, O>::new(start);
        wrapped(&mut v, rhs);

        assert_eq!(v.get(), expected);
        assert_eq!(v.to_bytes(), Value::<T, O>::new(expected).to_bytes());
    }

    macro_rules! check_int_ops {
        ($t:ty, $o:ty, $start:expr, $rhs:expr, $shift:expr) => {
            fidelity::<$t, $o>($start, $rhs, |a, b| *a += b, |a, b| *a += b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a -= b, |a, b| *a -= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a *= b, |a, b| *a *= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a /= b, |a, b| *a /= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a %= b, |a, b| *a %= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a &= b, |a, b| *a &= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a |= b, |a, b| *a |= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a ^= b, |a, b| *a ^= b);
            fidelity::<$t, $o>($start, $shift, |a, b| *a <<= b, |a, b| *a <<= b);
            fidelity::<$t, $o>($start, $shift, |a, b| *a >>= b, |a, b| *a >>= b);
        };
    }

    macro_rules! check_float_ops {
        ($t:ty, $o:ty, $start:expr, $rhs:expr) => {
            fidelity::<$t, $o>($start, $rhs, |a, b| *a += b, |a, b| *a += b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a -= b, |a, b| *a -= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a *= b, |a, b| *a *= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a /= b, |a, b| *a /= b);
            fidelity::<$t, $o>($start, $rhs, |a, b| *a %= b, |a, b| *a %= b);
        };
    }

    #[test]
    fn test_int_operator_fidelity() {
        check_int_ops!(i16, BE, 1234, 17, 3);
        check_int_ops!(i16, LE, -1234, 17, 3);
        check_int_ops!(u16, BE, 0x0f0d, 0x11, 4);
        check_int_ops!(u16, LE, 0x0f0d, 0x11, 4);
        check_int_ops!(i32, BE, -0x1234567, 99, 7);
        check_int_ops!(i32, LE, 0x1234567, -99, 7);
        check_int_ops!(u32, BE, 0x00de_adbe, 0x101, 12);
        check_int_ops!(u32, LE, 0x00de_adbe, 0x101, 12);
        check_int_ops!(i64, BE, -0x1234_5678_9abc, 10_007, 20);
        check_int_ops!(i64, LE, 0x1234_5678_9abc, -10_007, 20);
        check_int_ops!(u64, BE, 0xface_cafe_beef, 0xfff, 33);
        check_int_ops!(u64, LE, 0xface_cafe_beef, 0xfff, 33);
    }

    #[test]
    fn test_float_operator_fidelity() {
        check_float_ops!(f32, BE, 10.5, 4.25);
        check_float_ops!(f32, LE, -10.5, 4.25);
        check_float_ops!(f64, BE, 1e100, -3.5e-7);
        check_float_ops!(f64, LE, 1e100, -3.5e-7);
    }

    #[test]
    fn test_compound_sequence() {
        let mut a = Value::<i16, BE>::new(2);
        a += 5;
        assert_eq!(a, 7);
        a -= 5;
        assert_eq!(a, 2);

        let mut a = Value::<i16, LE>::new(63);
        a <<= 1;
        assert_eq!(a, 126);
        a >>= 1;
        assert_eq!(a, 63);
    }

    #[test]
    fn test_wrapped_rhs() {
        let mut a = Value::<u32, LE>::new(40);
        a += Value::<u32, BE>::new(2);
        assert_eq!(a, 42);

        a *= Value::<u32, LE>::new(2);
        assert_eq!(a, 84);

        a ^= Value::<u32, BE>::new(0xff);
        assert_eq!(a, 84 ^ 0xff);
    }

    #[test]
    fn test_increment_decrement() {
        let mut a = Value::<i32, LE>::new(0);
        let mut b = Value::<i32, BE>::new(0);

        assert_eq!(a.increment(), 1);
        assert_eq!(b.increment(), 1);
        assert_eq!(a, 1);
        assert_eq!(b, 1);

        assert_eq!(a.post_decrement(), 1);
        assert_eq!(b.post_decrement(), 1);
        assert_eq!(a, 0);
        assert_eq!(b, 0);

        assert_eq!(a.decrement(), -1);
        assert_eq!(b.post_increment(), 0);
        assert_eq!(b, 1);
    }

    #[test]
    fn test_float_increment() {
        let mut f = Value::<f64, BE>::new(0.5);
        assert_eq!(f.post_increment(), 0.5);
        assert_eq!(f.increment(), 2.5);
        assert_eq!(f.decrement(), 1.5);
    }

    #[test]
    fn test_wrapping_matches_native() {
        let mut a = Value::<u16, BE>::new(u16::MAX);
        a &= 0xff00;
        a |= 0x00ff;
        assert_eq!(a, u16::MAX);

        let mut b = Value::<i64, LE>::new(i64::MIN);
        b >>= 63;
        assert_eq!(b, -1);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let mut a = Value::<u32, BE>::new(1);
        a /= 0;
    }
}
