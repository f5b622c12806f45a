// ============================================================================
// Rational Parsing
// Reads `<integer> [ / <integer> ]` from the front of a string cursor
// ============================================================================

use crate::numeric::{NumericError, NumericResult, ParseErrorKind, Rational, Word};
use std::str::FromStr;

/// Why a single integer could not be read.
enum IntegerError {
    Missing,
    OutOfRange,
}

/// Read an optionally signed decimal integer from the start of `s`.
fn scan_integer<T: Word>(s: &str) -> Result<(T, &str), IntegerError> {
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digit_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return Err(IntegerError::Missing);
    }

    let (token, rest) = s.split_at(sign_len + digit_len);
    let value = T::from_str_radix(token, 10).map_err(|_| IntegerError::OutOfRange)?;
    Ok((value, rest))
}

fn scan_fraction<T: Word>(input: &str) -> NumericResult<(Rational<T>, &str)> {
    let (numerator, after_numerator) =
        scan_integer::<T>(input.trim_start()).map_err(|err| match err {
            IntegerError::Missing => ParseErrorKind::MissingNumerator,
            IntegerError::OutOfRange => ParseErrorKind::OutOfRange,
        })?;

    // without a '/', the match ends right after the numerator digits
    let Some(tail) = after_numerator.trim_start().strip_prefix('/') else {
        return Ok((Rational::from_integer(numerator), after_numerator));
    };

    let (denominator, rest) = scan_integer::<T>(tail.trim_start()).map_err(|err| match err {
        IntegerError::Missing => ParseErrorKind::MissingDenominator,
        IntegerError::OutOfRange => ParseErrorKind::OutOfRange,
    })?;

    let value = Rational::try_new(numerator, denominator)
        .map_err(|_| NumericError::ParseError(ParseErrorKind::OutOfRange))?;
    Ok((value, rest))
}

/// Parse one fraction from the front of `input` and advance the cursor
/// past it.
///
/// Accepts optional leading whitespace, a signed integer numerator and,
/// optionally, `/` and a signed integer denominator (whitespace allowed
/// around the `/`). A missing denominator means 1. On success the cursor
/// points just after the last matched digit; anything after it is left for
/// the caller. On failure the cursor is not moved.
///
/// # Errors
/// `ParseError` with:
/// - `MissingNumerator` if no integer starts the input
/// - `MissingDenominator` if a `/` is not followed by an integer
/// - `OutOfRange` if a component or the reduced value does not fit `T`
///
/// # Example
/// ```
/// use fixed_rational::codec::parse_fraction;
/// use fixed_rational::numeric::Rational;
///
/// let mut cursor = "3/6, 5";
/// let first: Rational<i32> = parse_fraction(&mut cursor).unwrap();
/// assert_eq!(first, Rational::new(1, 2));
/// assert_eq!(cursor, ", 5");
/// ```
pub fn parse_fraction<T: Word>(input: &mut &str) -> NumericResult<Rational<T>> {
    match scan_fraction(input) {
        Ok((value, rest)) => {
            *input = rest;
            Ok(value)
        },
        Err(err) => {
            tracing::trace!(word = T::NAME, input = *input, error = %err, "fraction parse failed");
            Err(err)
        },
    }
}

impl<T: Word> FromStr for Rational<T> {
    type Err = NumericError;

    /// Parse a whole string as a fraction.
    ///
    /// # Examples
    /// - "3/4" -> 3/4
    /// - " -10 / 4 " -> -5/2
    /// - "7" -> 7/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = s;
        let value = parse_fraction(&mut cursor)?;
        if !cursor.trim().is_empty() {
            return Err(NumericError::ParseError(ParseErrorKind::TrailingInput));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = Rational<i32>;

    fn parse_err(kind: ParseErrorKind) -> NumericError {
        NumericError::ParseError(kind)
    }

    #[test]
    fn test_parse_simple() {
        let x: R = "3/4".parse().unwrap();
        assert_eq!(x, R::new(3, 4));

        let y: R = "  -10 / 4 ".parse().unwrap();
        assert_eq!(y, R::new(-5, 2));

        let z: R = "7".parse().unwrap();
        assert_eq!(z, R::from_integer(7));

        let w: R = "+1/2".parse().unwrap();
        assert_eq!(w, R::new(1, 2));
    }

    #[test]
    fn test_parse_special_states() {
        assert!("1/0".parse::<R>().unwrap().is_infinite());
        assert_eq!("-5/0".parse::<R>().unwrap(), R::neg_infinity());
        assert!("0/0".parse::<R>().unwrap().is_nan());
    }

    #[test]
    fn test_cursor_stops_after_match() {
        let mut cursor = "1/2 3/4 x";
        let a: R = parse_fraction(&mut cursor).unwrap();
        assert_eq!(a, R::new(1, 2));
        assert_eq!(cursor, " 3/4 x");

        let b: R = parse_fraction(&mut cursor).unwrap();
        assert_eq!(b, R::new(3, 4));
        assert_eq!(cursor, " x");
    }

    #[test]
    fn test_cursor_without_denominator() {
        // whitespace after the numerator is not consumed when no '/' follows
        let mut cursor = "12  apples";
        let n: R = parse_fraction(&mut cursor).unwrap();
        assert_eq!(n, R::from_integer(12));
        assert_eq!(cursor, "  apples");

        let mut cursor = "5,6";
        let _: R = parse_fraction(&mut cursor).unwrap();
        assert_eq!(cursor, ",6");
    }

    #[test]
    fn test_missing_numerator() {
        let mut cursor = "abc";
        let result: NumericResult<R> = parse_fraction(&mut cursor);
        assert_eq!(result, Err(parse_err(ParseErrorKind::MissingNumerator)));
        assert_eq!(cursor, "abc");

        assert_eq!(
            "".parse::<R>(),
            Err(parse_err(ParseErrorKind::MissingNumerator))
        );
        assert_eq!(
            "/4".parse::<R>(),
            Err(parse_err(ParseErrorKind::MissingNumerator))
        );
        assert_eq!(
            "- 4".parse::<R>(),
            Err(parse_err(ParseErrorKind::MissingNumerator))
        );
    }

    #[test]
    fn test_missing_denominator() {
        let mut cursor = "3/ x";
        let result: NumericResult<R> = parse_fraction(&mut cursor);
        assert_eq!(result, Err(parse_err(ParseErrorKind::MissingDenominator)));
        assert_eq!(cursor, "3/ x");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            "300/7".parse::<Rational<u8>>(),
            Err(parse_err(ParseErrorKind::OutOfRange))
        );
        assert_eq!(
            "-1/2".parse::<Rational<u8>>(),
            Err(parse_err(ParseErrorKind::OutOfRange))
        );
        assert_eq!(
            "1/-2147483648".parse::<R>(),
            Err(parse_err(ParseErrorKind::OutOfRange))
        );
        assert_eq!("-2147483648".parse::<R>(), Ok(R::from_integer(i32::MIN)));
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            "1/2x".parse::<R>(),
            Err(parse_err(ParseErrorKind::TrailingInput))
        );
        assert_eq!(
            "1 2".parse::<R>(),
            Err(parse_err(ParseErrorKind::TrailingInput))
        );
    }

    #[test]
    fn test_round_trip() {
        for (n, d) in [(1, 2), (-7, 3), (5, 1), (0, 1), (i32::MIN, 1), (i32::MAX, 3)] {
            let r = R::new(n, d);
            assert_eq!(r.to_string().parse::<R>(), Ok(r));
        }
    }

    #[test]
    fn test_fraction_style_round_trip() {
        use crate::codec::FormatOptions;

        let opts = FormatOptions::fraction()
            .with_sign()
            .with_denominator()
            .with_spacing();
        let r = R::new(9, 6);
        assert_eq!(r.to_string_with(&opts), "+3 / 2");
        assert_eq!(r.to_string_with(&opts).parse::<R>(), Ok(r));
    }
}
