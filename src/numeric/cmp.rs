// ============================================================================
// Rational Comparison
// Equality against integers, ordering against rationals and integers
// ============================================================================
//
// Equality between two rationals is the derived component-wise comparison:
// canonical form makes it value equality, and 0/0 == 0/0 keeps `Eq`
// reflexive. Ordering treats NaN as unordered against every other value.

use super::rational::Rational;
use super::word::Word;
use std::cmp::Ordering;

/// Floor division for a positive divisor: `n = q*d + r` with `0 <= r < d`.
#[inline]
fn div_floor<T: Word>(n: T, d: T) -> (T, T) {
    let q = n / d;
    let r = n % d;
    if r < T::zero() {
        (q - T::one(), r + d)
    } else {
        (q, r)
    }
}

/// Compare `an/ad` with `bn/bd` (both denominators positive) without
/// forming any product. Compares integer parts, then the reciprocals of the
/// fractional parts, which reverses the order.
fn compare_exact<T: Word>(an: T, ad: T, bn: T, bd: T) -> Ordering {
    let (aq, ar) = div_floor(an, ad);
    let (bq, br) = div_floor(bn, bd);

    match aq.cmp(&bq) {
        Ordering::Equal => {},
        unequal => return unequal,
    }

    match (ar.is_zero(), br.is_zero()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_exact(bd, br, ad, ar),
    }
}

/// Order two non-NaN rationals.
fn compare<T: Word>(a: &Rational<T>, b: &Rational<T>) -> Ordering {
    let (an, ad) = a.into_raw();
    let (bn, bd) = b.into_raw();

    // both infinite: the numerators are the signs
    if ad.is_zero() && bd.is_zero() {
        return an.cmp(&bn);
    }

    // denominators are non-negative, so cross-multiplying keeps the order
    match (an.checked_mul(&bd), bn.checked_mul(&ad)) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        _ => compare_exact(an, ad, bn, bd),
    }
}

impl<T: Word> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nan(), other.is_nan()) {
            (false, false) => Some(compare(self, other)),
            (true, true) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<T: Word> PartialEq<T> for Rational<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.denominator().is_one() && self.numerator() == *other
    }
}

impl<T: Word> PartialOrd<T> for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.partial_cmp(&Rational::from_integer(*other))
    }
}

macro_rules! impl_integer_cmp {
    ($($t:ty),* $(,)?) => {$(
        impl PartialEq<Rational<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Rational<$t>) -> bool {
                other == self
            }
        }

        impl PartialOrd<Rational<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Rational<$t>) -> Option<Ordering> {
                Rational::from_integer(*self).partial_cmp(other)
            }
        }
    )*};
}

impl_integer_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Word> Rational<T> {
    /// Returns the smaller value; NaN loses to any other value.
    pub fn min(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            None if self.is_nan() => other,
            _ => self,
        }
    }

    /// Returns the larger value; NaN loses to any other value.
    pub fn max(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => other,
            None if self.is_nan() => other,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = Rational<i32>;

    fn r(n: i32, d: i32) -> R {
        R::new(n, d)
    }

    #[test]
    fn test_ordering() {
        assert!(r(2, 3) > r(1, 2));
        assert!(r(3, 2) >= r(3, 2));
        assert!(r(-1, 2) < r(1, 3));
        assert!(r(-1, 2) < r(-1, 3));
        assert_eq!(r(6, 4).partial_cmp(&r(3, 2)), Some(Ordering::Equal));
    }

    #[test]
    fn test_equality_is_component_wise() {
        assert_eq!(r(10, 25), r(2, 5));
        assert_ne!(r(1, 2), r(1, 3));
        assert_eq!(R::nan(), R::nan());
        assert_ne!(R::nan(), R::zero());
    }

    #[test]
    fn test_integer_equality() {
        assert_eq!(r(4, 2), 2);
        assert_eq!(2, r(4, 2));
        assert_ne!(r(1, 2), 0);
        assert_ne!(R::infinity(), 1);
        assert_ne!(R::nan(), 0);
    }

    #[test]
    fn test_integer_ordering() {
        assert!(r(5, 2) > 2);
        assert!(r(5, 2) < 3);
        assert!(3 > r(5, 2));
        assert!(-1 < r(-1, 2));
        assert!(R::infinity() > i32::MAX);
        assert!(R::neg_infinity() < i32::MIN);
    }

    #[test]
    fn test_special_value_ordering() {
        let inf = R::infinity();
        let ninf = R::neg_infinity();
        let nan = R::nan();

        assert!(inf > r(1_000_000, 1));
        assert!(ninf < r(-1_000_000, 1));
        assert!(ninf < inf);
        assert_eq!(inf.partial_cmp(&inf), Some(Ordering::Equal));
        assert_eq!(nan.partial_cmp(&r(1, 2)), None);
        assert_eq!(r(1, 2).partial_cmp(&nan), None);
        assert_eq!(nan.partial_cmp(&nan), Some(Ordering::Equal));
        assert!(!(nan < inf) && !(nan > inf));
    }

    #[test]
    fn test_ordering_without_overflow() {
        let max = i32::MAX;
        // cross products exceed i32 in all of these
        assert!(r(max, 2) < r(max - 2, 1));
        assert!(r(max, max - 1) < r(max - 1, max - 2));
        assert!(r(-max, max - 1) > r(-(max - 1), max - 2));
        assert!(r(i32::MIN, max) < r(-1, 1));
        assert_eq!(
            r(max, max - 1).partial_cmp(&r(max, max - 1)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_ordering_i8_boundaries() {
        type S = Rational<i8>;
        assert!(S::new(i8::MIN, 127) > S::new(-127, 126));
        assert!(S::new(127, 126) < S::new(126, 125));
        assert!(S::new(i8::MIN, 1) < S::new(-127, 1));
        assert!(S::new(-1, 127) > S::new(i8::MIN, 127));
        assert!(S::new(i8::MAX, 1) > 126i8);
    }

    #[test]
    fn test_ordering_unsigned_boundaries() {
        type U = Rational<u8>;
        assert!(U::new(255, 254) < U::new(254, 253));
        assert!(U::new(255, 1) > U::new(254, 1));
        assert!(U::new(1, 255) < U::new(1, 254));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(r(1, 2).min(r(1, 3)), r(1, 3));
        assert_eq!(r(1, 2).max(r(1, 3)), r(1, 2));
        assert_eq!(R::nan().min(r(1, 3)), r(1, 3));
        assert_eq!(r(1, 3).max(R::nan()), r(1, 3));
    }

    #[test]
    fn test_ordering_agrees_with_floats() {
        let values: Vec<R> = (-6..=6)
            .flat_map(|n| (1..=6).map(move |d| r(n, d)))
            .collect();
        for a in &values {
            for b in &values {
                let fa = a.numerator() as f64 / a.denominator() as f64;
                let fb = b.numerator() as f64 / b.denominator() as f64;
                assert_eq!(a.partial_cmp(b), fa.partial_cmp(&fb), "{:?} vs {:?}", a, b);
            }
        }
    }
}
