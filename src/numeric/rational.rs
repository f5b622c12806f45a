// ============================================================================
// Rational
// Exact fraction over a fixed-width integer word, always in reduced form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::word::{gcd, Word};
use num_traits::{One, Signed, Zero};

/// Exact rational number `numerator / denominator` over the word type `T`.
///
/// Every value is kept in canonical form:
/// - the denominator is never negative (the sign lives on the numerator)
/// - numerator and denominator share no factor above 1
///
/// The denominator may be zero. `n/0` with `n != 0` is an infinity (always
/// stored as `1/0` or `-1/0`) and `0/0` is not-a-number. These are ordinary
/// values, not errors: they fall out of dividing by zero.
///
/// # Overflow
/// Arithmetic uses the word type for intermediates, so cross-multiplication
/// can overflow on narrow words even when the reduced result would fit.
/// `checked_*` methods report this as `Overflow`/`Underflow`; the operator
/// traits panic. Ordering never overflows.
///
/// # Example
/// ```
/// use fixed_rational::numeric::Rational;
///
/// let a = Rational::new(3i32, 2);
/// let b = Rational::new(2i32, 3);
/// assert_eq!(a + b, Rational::new(13, 6));
/// assert_eq!(Rational::new(10i32, 25), Rational::new(2, 5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

// ============================================================================
// Normalizer
// ============================================================================

/// Reduce `(numerator, denominator)` to canonical form.
///
/// Sign handling and the gcd run on unsigned magnitudes, so `T::MIN` in
/// either position is handled exactly. Fails with `Overflow` only when the
/// reduced pair does not fit `T`, e.g. `(i32::MIN, -1)` or `(1, i32::MIN)`.
pub(crate) fn normalize<T: Word>(numerator: T, denominator: T) -> NumericResult<(T, T)> {
    let zero = T::zero();
    let negative = (numerator < zero) != (denominator < zero);

    let mut n = numerator.magnitude();
    let mut d = denominator.magnitude();

    let g = gcd(n, d);
    if g.is_zero() {
        // 0/0 is already canonical
        return Ok((zero, zero));
    }
    if g > T::Magnitude::one() {
        n = n / g;
        d = d / g;
    }

    let numerator = T::from_magnitude(n, negative).ok_or(NumericError::Overflow)?;
    let denominator = T::from_magnitude(d, false).ok_or(NumericError::Overflow)?;
    Ok((numerator, denominator))
}

impl<T: Word> Rational<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a rational from a numerator/denominator pair, reducing it.
    ///
    /// # Panics
    /// If the reduced pair does not fit `T` (see [`Rational::try_new`]).
    #[inline]
    pub fn new(numerator: T, denominator: T) -> Self {
        Self::try_new(numerator, denominator).expect("Rational normalization overflow")
    }

    /// Create a rational from a numerator/denominator pair, reducing it.
    ///
    /// # Errors
    /// Returns `Overflow` when the canonical pair is not representable,
    /// e.g. `try_new(i8::MIN, -1)` would need a numerator of 128.
    pub fn try_new(numerator: T, denominator: T) -> NumericResult<Self> {
        match normalize(numerator, denominator) {
            Ok((n, d)) => Ok(Self::new_raw(n, d)),
            Err(err) => {
                tracing::debug!(
                    word = T::NAME,
                    numerator = %numerator,
                    denominator = %denominator,
                    "rational not representable after reduction"
                );
                Err(err)
            },
        }
    }

    /// Create a rational equal to an integer (denominator 1).
    #[inline]
    pub fn from_integer(value: T) -> Self {
        Self::new_raw(value, T::one())
    }

    /// Wrap a pair that is already canonical.
    #[inline]
    pub(crate) fn new_raw(numerator: T, denominator: T) -> Self {
        let value = Self {
            numerator,
            denominator,
        };
        debug_assert!(
            value.is_canonical(),
            "non-canonical rational {}/{}",
            numerator,
            denominator
        );
        value
    }

    /// Zero (`0/1`)
    #[inline]
    pub fn zero() -> Self {
        Self::new_raw(T::zero(), T::one())
    }

    /// One (`1/1`)
    #[inline]
    pub fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }

    /// Positive infinity (`1/0`)
    #[inline]
    pub fn infinity() -> Self {
        Self::new_raw(T::one(), T::zero())
    }

    /// Not-a-number (`0/0`)
    #[inline]
    pub fn nan() -> Self {
        Self::new_raw(T::zero(), T::zero())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The numerator; carries the sign.
    #[inline]
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// The denominator; never negative.
    #[inline]
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Split into `(numerator, denominator)`.
    #[inline]
    pub fn into_raw(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    /// Check if the denominator is non-zero.
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Check if value is `1/0` or `-1/0`.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// Check if value is `0/0`.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero() && !self.denominator.is_zero()
    }

    /// Check if the denominator is 1.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Check if value is above zero (positive infinity included).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator > T::zero()
    }

    /// Check if value is below zero (negative infinity included).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator < T::zero()
    }

    /// Whether the stored pair satisfies the canonical-form invariant.
    pub fn is_canonical(&self) -> bool {
        if self.denominator < T::zero() {
            return false;
        }
        if self.is_nan() {
            return true;
        }
        gcd(self.numerator.magnitude(), self.denominator.magnitude()).is_one()
    }
}

impl<T: Word + Signed> Rational<T> {
    /// Negative infinity (`-1/0`)
    #[inline]
    pub fn neg_infinity() -> Self {
        Self::new_raw(-T::one(), T::zero())
    }
}

// ============================================================================
// Free Constructors
// ============================================================================

/// Shorthand for [`Rational::new`].
#[inline]
pub fn rational<T: Word>(numerator: T, denominator: T) -> Rational<T> {
    Rational::new(numerator, denominator)
}

/// Shorthand for [`Rational::from_integer`].
#[inline]
pub fn rational_int<T: Word>(value: T) -> Rational<T> {
    Rational::from_integer(value)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Word> Default for Rational<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Word> From<T> for Rational<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: Word> From<(T, T)> for Rational<T> {
    #[inline]
    fn from((numerator, denominator): (T, T)) -> Self {
        Self::new(numerator, denominator)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Rational over `i32`
pub type Rational32 = Rational<i32>;

/// Rational over `i64`
pub type Rational64 = Rational<i64>;

/// Rational over `u32` (no negative values)
pub type URational32 = Rational<u32>;

/// Rational over `u64` (no negative values)
pub type URational64 = Rational<u64>;

// ============================================================================
// Tests
// ============================================================================
