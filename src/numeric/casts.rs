// ============================================================================
// Rational Casts
// Conversions to floating-point, integral and decimal types
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rational::Rational;
use super::word::Word;
use num_traits::{Float, NumCast, ToPrimitive};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

impl<T: Word> Rational<T> {
    // ========================================================================
    // Floating Point
    // ========================================================================

    /// `numerator / denominator` in floating point.
    ///
    /// Infinite rationals give `±inf` and NaN gives NaN.
    #[inline]
    pub fn to_float<F: Float>(&self) -> F {
        let numerator = <F as NumCast>::from(self.numerator()).unwrap_or_else(F::nan);
        let denominator = <F as NumCast>::from(self.denominator()).unwrap_or_else(F::nan);
        numerator / denominator
    }

    /// Convert to `f64`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.to_float()
    }

    /// Convert to `f32`.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.to_float()
    }

    // ========================================================================
    // Integral
    // ========================================================================

    /// Truncating integer division `numerator / denominator`, cast to `I`.
    ///
    /// # Errors
    /// - `DivisionByZero` for infinite and NaN values
    /// - `Overflow` / `Underflow` if the quotient does not fit `I`
    pub fn to_integer<I: Word>(&self) -> NumericResult<I> {
        if self.denominator().is_zero() {
            tracing::debug!(
                numerator = %self.numerator(),
                target = I::NAME,
                "integral cast of non-finite rational"
            );
            return Err(NumericError::DivisionByZero);
        }

        let quotient = self.numerator() / self.denominator();
        <I as NumCast>::from(quotient).ok_or(if quotient < T::zero() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    // ========================================================================
    // Decimal (API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Values whose decimal expansion does not terminate are rounded to
    /// `Decimal`'s 28 significant digits.
    ///
    /// # Errors
    /// - `DivisionByZero` for infinite and NaN values
    /// - `Overflow` if a component exceeds `Decimal`'s 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        if self.denominator().is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let numerator = self
            .numerator()
            .to_i128()
            .and_then(Decimal::from_i128)
            .ok_or(NumericError::Overflow)?;
        let denominator = self
            .denominator()
            .to_i128()
            .and_then(Decimal::from_i128)
            .ok_or(NumericError::Overflow)?;

        numerator
            .checked_div(denominator)
            .ok_or(NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal` exactly: `mantissa / 10^scale`,
    /// reduced before narrowing to `T`.
    ///
    /// # Errors
    /// `Overflow` / `Underflow` if the reduced fraction does not fit `T`.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let scale = 10i128
            .checked_pow(value.scale())
            .ok_or(NumericError::Overflow)?;
        let (numerator, denominator) = Rational::<i128>::try_new(value.mantissa(), scale)?.into_raw();

        let out_of_range = if numerator < 0 {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };
        let numerator = <T as NumCast>::from(numerator).ok_or(out_of_range)?;
        let denominator = <T as NumCast>::from(denominator).ok_or(NumericError::Overflow)?;
        Ok(Self::new_raw(numerator, denominator))
    }
}

impl<T: Word> ToPrimitive for Rational<T> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_integer().ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_integer().ok()
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(self.to_float())
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}
