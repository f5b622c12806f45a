// ============================================================================
// Integral Word Types
// The fixed-width integer bound that parameterizes Rational<T>
// ============================================================================

use num_traits::{CheckedNeg, PrimInt};
use std::fmt;
use std::hash::Hash;

/// A fixed-width primitive integer usable as the numerator/denominator word.
///
/// Implemented for every signed and unsigned primitive integer. On top of
/// `PrimInt` it exposes an overflow-free magnitude: `i64::MIN.magnitude()`
/// is `2^63` as a `u64`, which `abs()` cannot produce.
pub trait Word:
    PrimInt
    + CheckedNeg
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Octal
    + fmt::Binary
    + Send
    + Sync
    + 'static
{
    /// Unsigned type of the same width (`Self` for unsigned words)
    type Magnitude: Word;

    /// Whether the word can hold negative values
    const SIGNED: bool;

    /// Type name, used in diagnostics
    const NAME: &'static str;

    /// Absolute value as the unsigned word. Never overflows.
    fn magnitude(self) -> Self::Magnitude;

    /// Rebuild a word from a magnitude and a sign.
    ///
    /// Returns `None` when the value does not fit (a magnitude above `MAX`
    /// for a positive signed result, or any non-zero negative for unsigned).
    fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Option<Self>;
}

macro_rules! impl_signed_word {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Word for $t {
            type Magnitude = $u;

            const SIGNED: bool = true;
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn magnitude(self) -> $u {
                self.unsigned_abs()
            }

            #[inline]
            fn from_magnitude(magnitude: $u, negative: bool) -> Option<Self> {
                if !negative {
                    <$t>::try_from(magnitude).ok()
                } else if magnitude == <$t>::MIN.unsigned_abs() {
                    Some(<$t>::MIN)
                } else {
                    <$t>::try_from(magnitude).ok().map(|v| -v)
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned_word {
    ($($t:ty),* $(,)?) => {$(
        impl Word for $t {
            type Magnitude = $t;

            const SIGNED: bool = false;
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn magnitude(self) -> $t {
                self
            }

            #[inline]
            fn from_magnitude(magnitude: $t, negative: bool) -> Option<Self> {
                if negative && magnitude != 0 {
                    None
                } else {
                    Some(magnitude)
                }
            }
        }
    )*};
}

impl_signed_word!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

impl_unsigned_word!(u8, u16, u32, u64, u128, usize);

/// Greatest common divisor (Euclid). `gcd(0, 0) == 0`.
#[inline]
pub(crate) fn gcd<U: PrimInt>(mut a: U, mut b: U) -> U {
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
