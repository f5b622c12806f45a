// ============================================================================
// Mixed-Width Operands
// Explicit widening table for rationals over different word types
// ============================================================================
//
// A Rational<N> converts losslessly into Rational<W> when every N fits in W.
// Widening keeps the canonical form (same values, same gcd), so no
// renormalization is needed. For each pair below, arithmetic, compound
// assignment on the wide side, equality and ordering work in both operand
// orders and produce Rational<W>:
//
//   i8  -> i16 i32 i64 i128
//   i16 -> i32 i64 i128
//   i32 -> i64 i128
//   i64 -> i128
//   u8  -> u16 u32 u64 u128 i16 i32 i64 i128
//   u16 -> u32 u64 u128 i32 i64 i128
//   u32 -> u64 u128 i64 i128
//   u64 -> u128 i128
//
// isize/usize are left out: their width depends on the target.

use super::rational::Rational;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! widen_binop {
    ($narrow:ty, $wide:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<Rational<$narrow>> for Rational<$wide> {
            type Output = Rational<$wide>;

            #[inline]
            fn $method(self, rhs: Rational<$narrow>) -> Rational<$wide> {
                $imp::$method(self, Rational::<$wide>::from(rhs))
            }
        }

        impl $imp<Rational<$wide>> for Rational<$narrow> {
            type Output = Rational<$wide>;

            #[inline]
            fn $method(self, rhs: Rational<$wide>) -> Rational<$wide> {
                $imp::$method(Rational::<$wide>::from(self), rhs)
            }
        }

        impl $assign_imp<Rational<$narrow>> for Rational<$wide> {
            #[inline]
            fn $assign_method(&mut self, rhs: Rational<$narrow>) {
                *self = $imp::$method(*self, rhs);
            }
        }
    };
}

macro_rules! widen {
    ($narrow:ty => $($wide:ty),+ $(,)?) => {$(
        impl From<Rational<$narrow>> for Rational<$wide> {
            #[inline]
            fn from(value: Rational<$narrow>) -> Self {
                let (numerator, denominator) = value.into_raw();
                Rational::new_raw(<$wide>::from(numerator), <$wide>::from(denominator))
            }
        }

        widen_binop!($narrow, $wide, Add, add, AddAssign, add_assign);
        widen_binop!($narrow, $wide, Sub, sub, SubAssign, sub_assign);
        widen_binop!($narrow, $wide, Mul, mul, MulAssign, mul_assign);
        widen_binop!($narrow, $wide, Div, div, DivAssign, div_assign);

        impl PartialEq<Rational<$narrow>> for Rational<$wide> {
            #[inline]
            fn eq(&self, other: &Rational<$narrow>) -> bool {
                *self == Rational::<$wide>::from(*other)
            }
        }

        impl PartialEq<Rational<$wide>> for Rational<$narrow> {
            #[inline]
            fn eq(&self, other: &Rational<$wide>) -> bool {
                Rational::<$wide>::from(*self) == *other
            }
        }

        impl PartialOrd<Rational<$narrow>> for Rational<$wide> {
            #[inline]
            fn partial_cmp(&self, other: &Rational<$narrow>) -> Option<Ordering> {
                self.partial_cmp(&Rational::<$wide>::from(*other))
            }
        }

        impl PartialOrd<Rational<$wide>> for Rational<$narrow> {
            #[inline]
            fn partial_cmp(&self, other: &Rational<$wide>) -> Option<Ordering> {
                Rational::<$wide>::from(*self).partial_cmp(other)
            }
        }
    )+};
}

widen!(i8 => i16, i32, i64, i128);
widen!(i16 => i32, i64, i128);
widen!(i32 => i64, i128);
widen!(i64 => i128);
widen!(u8 => u16, u32, u64, u128, i16, i32, i64, i128);
widen!(u16 => u32, u64, u128, i32, i64, i128);
widen!(u32 => u64, u128, i64, i128);
widen!(u64 => u128, i128);
