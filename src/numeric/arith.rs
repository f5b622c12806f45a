// ============================================================================
// Rational Arithmetic
// Checked operations plus the operator traits built on top of them
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rational::Rational;
use super::word::{gcd, Word};
use num_traits::{Float, One, Pow, Signed, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ============================================================================
// Word Helpers
// ============================================================================

#[inline]
fn mul_word<T: Word>(a: T, b: T) -> NumericResult<T> {
    a.checked_mul(&b).ok_or_else(|| {
        if (a < T::zero()) != (b < T::zero()) {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        }
    })
}

#[inline]
fn add_word<T: Word>(a: T, b: T) -> NumericResult<T> {
    a.checked_add(&b).ok_or_else(|| {
        if b > T::zero() {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        }
    })
}

#[inline]
fn sub_word<T: Word>(a: T, b: T) -> NumericResult<T> {
    a.checked_sub(&b).ok_or_else(|| {
        if b < T::zero() {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        }
    })
}

/// Non-zero gcd of two words, if it fits the word.
#[inline]
fn shared_factor<T: Word>(a: T, b: T) -> Option<T> {
    let g = gcd(a.magnitude(), b.magnitude());
    if g.is_zero() {
        None
    } else {
        T::from_magnitude(g, false)
    }
}

/// Divide both words by their shared factor.
///
/// Zero-ness and sign of each word are preserved, so the final reduced
/// result is the same as without the pre-reduction; only the
/// intermediates shrink. The division runs on magnitudes, so a factor of
/// `|T::MIN|` (`cancel(MIN, 0)`, `cancel(MIN, MIN)`) still reduces to `±1`.
#[inline]
fn cancel<T: Word>(a: T, b: T) -> (T, T) {
    let g = gcd(a.magnitude(), b.magnitude());
    if g.is_zero() || g.is_one() {
        return (a, b);
    }
    // |x| / g <= |x|, so re-applying the sign always fits
    let reduce = |x: T| T::from_magnitude(x.magnitude() / g, x < T::zero()).unwrap_or(x);
    (reduce(a), reduce(b))
}

impl<T: Word> Rational<T> {
    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition: `(a.n*b.d + b.n*a.d) / (a.d*b.d)`, reduced.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an intermediate product or sum
    /// does not fit the word type.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.cross_combine(rhs, add_word)
    }

    /// Checked subtraction: `(a.n*b.d - b.n*a.d) / (a.d*b.d)`, reduced.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if an intermediate does not fit;
    /// on unsigned words any negative result is `Underflow`.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.cross_combine(rhs, sub_word)
    }

    /// Checked multiplication: `(a.n*b.n) / (a.d*b.d)`, reduced.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a product does not fit.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let (an, bd) = cancel(self.numerator(), rhs.denominator());
        let (bn, ad) = cancel(rhs.numerator(), self.denominator());
        Self::try_new(mul_word(an, bn)?, mul_word(ad, bd)?)
    }

    /// Checked division: `(a.n*b.d) / (a.d*b.n)`, reduced.
    ///
    /// Dividing by zero is not an error: `x / 0` is an infinity and
    /// `0 / 0` is NaN.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if a product does not fit.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        let (an, bn) = cancel(self.numerator(), rhs.numerator());
        let (ad, bd) = cancel(self.denominator(), rhs.denominator());
        Self::try_new(mul_word(an, bd)?, mul_word(ad, bn)?)
    }

    /// Checked integer power. A negative exponent raises the reciprocal,
    /// so `0 ^^ -1` is an infinity.
    ///
    /// # Errors
    /// Returns `Overflow` if either raised component does not fit.
    pub fn checked_pow(self, exp: i32) -> NumericResult<Self> {
        self.raise(exp.unsigned_abs() as usize, exp < 0)
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for `T::MIN` numerators, `Underflow` for any
    /// positive value of an unsigned word.
    pub fn checked_neg(self) -> NumericResult<Self> {
        let numerator = self.numerator().checked_neg().ok_or(if T::SIGNED {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })?;
        Ok(Self::new_raw(numerator, self.denominator()))
    }

    /// Checked absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `T::MIN` numerators.
    pub fn checked_abs(self) -> NumericResult<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Checked reciprocal: `d/n`, reduced. `0` becomes an infinity.
    ///
    /// # Errors
    /// Returns `Overflow` when a negative `T::MIN` numerator would have
    /// to become the denominator.
    pub fn checked_recip(self) -> NumericResult<Self> {
        Self::try_new(self.denominator(), self.numerator())
    }

    /// Integer power. See [`Rational::checked_pow`].
    ///
    /// # Panics
    /// On overflow.
    #[inline]
    pub fn pow(self, exp: i32) -> Self {
        self.checked_pow(exp).expect("Rational power overflow")
    }

    /// Reciprocal. See [`Rational::checked_recip`].
    ///
    /// # Panics
    /// On overflow.
    #[inline]
    pub fn recip(self) -> Self {
        self.checked_recip().expect("Rational reciprocal overflow")
    }

    /// Floating-point power: converts to `F` first, then `F::powf`.
    #[inline]
    pub fn powf<F: Float>(self, exp: F) -> F {
        self.to_float::<F>().powf(exp)
    }

    /// Add or subtract over the least common denominator.
    ///
    /// Scaling by `lcm(a.d, b.d)` instead of `a.d*b.d` gives the same reduced
    /// result with smaller intermediates. When both denominators are zero
    /// the plain cross-multiplied form applies, which is always `0/0`.
    fn cross_combine(
        self,
        rhs: Self,
        op: fn(T, T) -> NumericResult<T>,
    ) -> NumericResult<Self> {
        let (an, ad) = self.into_raw();
        let (bn, bd) = rhs.into_raw();

        let (a_scale, b_scale) = match shared_factor(ad, bd) {
            Some(g) => (bd / g, ad / g),
            None => (bd, ad),
        };

        let numerator = op(mul_word(an, a_scale)?, mul_word(bn, b_scale)?)?;
        let denominator = mul_word(ad, a_scale)?;
        Self::try_new(numerator, denominator)
    }

    fn raise(self, exp: usize, invert: bool) -> NumericResult<Self> {
        let (base_n, base_d) = if invert {
            (self.denominator(), self.numerator())
        } else {
            self.into_raw()
        };
        let numerator = num_traits::checked_pow(base_n, exp).ok_or(NumericError::Overflow)?;
        let denominator = num_traits::checked_pow(base_d, exp).ok_or(NumericError::Overflow)?;
        Self::try_new(numerator, denominator)
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

// Infallible operators for ergonomics (panic on overflow - use checked_* for
// untrusted magnitudes)
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $checked:ident, $what:literal) => {
        impl<T: Word> $imp for Rational<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$checked(rhs)
                    .expect(concat!("Rational ", $what, " overflow"))
            }
        }

        impl<T: Word> $imp<T> for Rational<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $imp::$method(self, Self::from_integer(rhs))
            }
        }

        impl<T: Word> $assign_imp for Rational<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $imp::$method(*self, rhs);
            }
        }

        impl<T: Word> $assign_imp<T> for Rational<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = $imp::$method(*self, rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, checked_add, "addition");
forward_binop!(Sub, sub, SubAssign, sub_assign, checked_sub, "subtraction");
forward_binop!(Mul, mul, MulAssign, mul_assign, checked_mul, "multiplication");
forward_binop!(Div, div, DivAssign, div_assign, checked_div, "division");

// `int op rational`. Addition and multiplication commute; subtraction and
// division keep the integer on the left: (i*d - n)/d and (i*d)/n.
macro_rules! impl_integer_lhs {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Rational<$t>> for $t {
            type Output = Rational<$t>;

            #[inline]
            fn add(self, rhs: Rational<$t>) -> Rational<$t> {
                rhs + self
            }
        }

        impl Sub<Rational<$t>> for $t {
            type Output = Rational<$t>;

            #[inline]
            fn sub(self, rhs: Rational<$t>) -> Rational<$t> {
                Rational::from_integer(self) - rhs
            }
        }

        impl Mul<Rational<$t>> for $t {
            type Output = Rational<$t>;

            #[inline]
            fn mul(self, rhs: Rational<$t>) -> Rational<$t> {
                rhs * self
            }
        }

        impl Div<Rational<$t>> for $t {
            type Output = Rational<$t>;

            #[inline]
            fn div(self, rhs: Rational<$t>) -> Rational<$t> {
                Rational::from_integer(self) / rhs
            }
        }
    )*};
}

impl_integer_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Word + Signed> Neg for Rational<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Rational negation overflow")
    }
}

impl<T: Word> Pow<i32> for Rational<T> {
    type Output = Self;

    #[inline]
    fn pow(self, exp: i32) -> Self::Output {
        Rational::pow(self, exp)
    }
}

impl<T: Word> Pow<u32> for Rational<T> {
    type Output = Self;

    #[inline]
    fn pow(self, exp: u32) -> Self::Output {
        self.raise(exp as usize, false)
            .expect("Rational power overflow")
    }
}

impl<T: Word> Pow<f32> for Rational<T> {
    type Output = f32;

    #[inline]
    fn pow(self, exp: f32) -> f32 {
        self.powf(exp)
    }
}

impl<T: Word> Pow<f64> for Rational<T> {
    type Output = f64;

    #[inline]
    fn pow(self, exp: f64) -> f64 {
        self.powf(exp)
    }
}

impl<T: Word> Zero for Rational<T> {
    #[inline]
    fn zero() -> Self {
        Rational::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<T: Word> One for Rational<T> {
    #[inline]
    fn one() -> Self {
        Rational::one()
    }
}

impl<T: Word> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<T: Word> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type R = Rational<i32>;

    fn r(n: i32, d: i32) -> R {
        R::new(n, d)
    }

    #[test]
    fn test_add() {
        assert_eq!(r(3, 2) + r(2, 3), r(13, 6));
        assert_eq!(r(1, 6) + r(1, 3), r(1, 2));
        assert_eq!(r(1, 2) + r(-1, 2), R::zero());
    }

    #[test]
    fn test_sub() {
        assert_eq!(r(3, 2) - r(2, 3), r(5, 6));
        assert_eq!(r(1, 2) - 2, r(-3, 2));
        assert_eq!(r(1, 4) - r(1, 4), R::zero());
    }

    #[test]
    fn test_mul() {
        assert_eq!(r(3, 2) * r(2, 5), r(3, 5));
        assert_eq!(r(-3, 4) * r(4, 3), r(-1, 1));
        assert_eq!(r(5, 7) * 0, R::zero());
    }

    #[test]
    fn test_div() {
        assert_eq!(r(3, 2) / r(5, 11), r(33, 10));
        assert_eq!(r(1, 2) / r(-1, 4), r(-2, 1));
        assert_eq!(r(6, 1) / 4, r(3, 2));
    }

    #[test]
    fn test_divide_by_zero_is_a_value() {
        assert!((r(3, 2) / R::zero()).is_infinite());
        assert_eq!(r(-3, 2) / R::zero(), R::neg_infinity());
        assert!((R::zero() / R::zero()).is_nan());
        assert!((r(1, 2) / 0).is_infinite());
    }

    #[test]
    fn test_integer_lhs() {
        assert_eq!(1 + r(3, 2), r(5, 2));
        assert_eq!(3 / r(2, 3), r(9, 2));
        assert_eq!(2 - r(1, 2), r(3, 2));
        assert_eq!(4 * r(3, 8), r(3, 2));
        assert_eq!(7u8 - Rational::<u8>::new(1, 2), Rational::<u8>::new(13, 2));
    }

    #[test]
    fn test_compound_assignment() {
        let mut x = r(1, 2);
        x += r(1, 3);
        assert_eq!(x, r(5, 6));
        x -= 1;
        assert_eq!(x, r(-1, 6));
        x *= r(-6, 1);
        assert_eq!(x, R::one());
        x /= 4;
        assert_eq!(x, r(1, 4));
        assert!(x.is_canonical());
    }

    #[test]
    fn test_infinity_arithmetic() {
        let inf = R::infinity();
        assert_eq!(inf + 1, inf);
        assert_eq!(inf * r(-2, 3), R::neg_infinity());
        assert!((inf - inf).is_nan());
        assert!((inf * 0).is_nan());
        assert!((R::nan() + 1).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(r(2, 3).pow(2), r(4, 9));
        assert_eq!(r(-2, 3).pow(3), r(-8, 27));
        assert_eq!(r(2, 3).pow(-2), r(9, 4));
        assert_eq!(r(-2, 3).pow(-1), r(-3, 2));
        assert_eq!(r(5, 7).pow(0), R::one());
        assert!(R::zero().pow(-1).is_infinite());
        assert_eq!(Pow::pow(r(1, 2), 3u32), r(1, 8));
    }

    #[test]
    fn test_powf() {
        assert_eq!(r(1, 4).powf(0.5f64), 0.5);
        assert_eq!(Pow::pow(r(1, 4), 0.5f64), 0.5);
        assert_eq!(Pow::pow(r(9, 1), 0.5f32), 3.0f32);
    }

    #[test]
    fn test_pow_overflow() {
        assert_eq!(r(2, 1).checked_pow(31), Err(NumericError::Overflow));
        assert_eq!(r(1, 2).checked_pow(-31), Err(NumericError::Overflow));
        assert_eq!(r(2, 1).checked_pow(30), Ok(r(1 << 30, 1)));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-r(1, 2), r(-1, 2));
        assert_eq!(-(-r(3, 7)), r(3, 7));
        assert_eq!(-R::infinity(), R::neg_infinity());
        assert!((-R::nan()).is_nan());
        assert_eq!(R::from_integer(i32::MIN).checked_neg(), Err(NumericError::Overflow));
        assert_eq!(
            Rational::<u32>::new(1, 2).checked_neg(),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_abs_and_recip() {
        assert_eq!(r(-3, 4).checked_abs(), Ok(r(3, 4)));
        assert_eq!(r(-3, 4).recip(), r(-4, 3));
        assert!(R::zero().recip().is_infinite());
        assert_eq!(
            R::from_integer(i32::MIN).checked_recip(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_overflow_reporting() {
        let big = R::from_integer(i32::MAX);
        assert_eq!(big.checked_add(R::one()), Err(NumericError::Overflow));
        assert_eq!(
            R::from_integer(i32::MIN).checked_sub(R::one()),
            Err(NumericError::Underflow)
        );
        assert_eq!(big.checked_mul(r(2, 1)), Err(NumericError::Overflow));
        assert_eq!(big.checked_mul(r(-2, 1)), Err(NumericError::Underflow));
        // reduced result fits even though a naive cross product would not
        assert_eq!(big.checked_mul(r(1, i32::MAX)), Ok(R::one()));
        assert_eq!(
            r(1, i32::MAX).checked_add(r(1, i32::MAX)),
            Ok(r(2, i32::MAX))
        );
    }

    #[test]
    fn test_min_times_infinity() {
        let min = R::from_integer(i32::MIN);
        assert_eq!(min.checked_mul(R::neg_infinity()), Ok(R::infinity()));
        assert_eq!(R::neg_infinity().checked_mul(min), Ok(R::infinity()));
        assert_eq!(min * R::infinity(), R::neg_infinity());
        assert!((min * R::zero() * R::infinity()).is_nan());
    }

    #[test]
    fn test_min_divided_by_special_values() {
        let min = R::from_integer(i32::MIN);
        assert_eq!(min.checked_div(R::zero()), Ok(R::neg_infinity()));
        assert_eq!(min.checked_div(min), Ok(R::one()));
        assert_eq!(R::zero().checked_div(min), Ok(R::zero()));
        assert_eq!(min.checked_div(R::from_integer(-1)), Err(NumericError::Overflow));
    }

    #[test]
    fn test_unsigned_underflow() {
        let a = Rational::<u32>::new(1, 3);
        let b = Rational::<u32>::new(1, 2);
        assert_eq!(a.checked_sub(b), Err(NumericError::Underflow));
        assert_eq!(b.checked_sub(a), Ok(Rational::new(1, 6)));
    }

    #[test]
    #[should_panic(expected = "Rational addition overflow")]
    fn test_operator_panics_on_overflow() {
        let _ = Rational::<i8>::from_integer(127) + Rational::<i8>::one();
    }

    #[test]
    fn test_narrow_word_limits() {
        type R8 = Rational<i8>;
        assert_eq!(R8::new(1, 2) + R8::new(1, 3), R8::new(5, 6));
        assert_eq!(
            R8::new(1, 100).checked_add(R8::new(1, 99)),
            Err(NumericError::Overflow)
        );
        assert_eq!(R8::new(-128, 1) * R8::new(1, 2), R8::new(-64, 1));
    }

    #[test]
    fn test_sum_and_product() {
        let parts = vec![r(1, 2), r(1, 3), r(1, 6)];
        assert_eq!(parts.iter().copied().sum::<R>(), R::one());
        assert_eq!(parts.into_iter().product::<R>(), r(1, 36));
    }

    #[test]
    fn test_num_traits_identities() {
        assert!(<R as Zero>::zero().is_zero());
        assert_eq!(<R as One>::one(), R::from_integer(1));
    }
}
