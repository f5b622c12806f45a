// ============================================================================
// Fixed Rational Library
// Exact fractions over fixed-width integer words, always in reduced form
// ============================================================================

//! # Fixed Rational
//!
//! An exact rational number type, `Rational<T>`, generic over any primitive
//! integer word (signed or unsigned, 8 to 128 bits).
//!
//! ## Features
//!
//! - **Canonical form** after every operation: denominator never negative,
//!   numerator and denominator coprime
//! - **Special values**: `n/0` is an infinity and `0/0` is NaN, so division
//!   by zero is a value, not a panic
//! - **Mixed operands**: rational with integer in either order, and
//!   rationals of different widths through an explicit widening table
//! - **Checked arithmetic** (`checked_add`, ...) next to panicking operators
//! - **Overflow-free ordering** even when cross products exceed the word
//! - **Text codec**: `Display`/radix formatting, configurable fraction style,
//!   and a cursor parser that consumes exactly one fraction
//!
//! ## Example
//!
//! ```rust
//! use fixed_rational::prelude::*;
//!
//! let a = Rational::new(3i64, 2);
//! let b = Rational::new(2i64, 3);
//!
//! assert_eq!(a + b, Rational::<i64>::new(13, 6));
//! assert_eq!(1 + a, Rational::<i64>::new(5, 2));
//! assert!(b > Rational::<i64>::new(1, 2));
//!
//! // division by zero is an infinity
//! assert!((a / 0).is_infinite());
//!
//! // fraction-style formatting and parsing
//! let opts = FormatOptions::fraction().with_sign();
//! assert_eq!(a.to_string_with(&opts), "+3/2");
//!
//! let mut cursor = "10/4 and more";
//! let parsed: Rational<i64> = parse_fraction(&mut cursor).unwrap();
//! assert_eq!(parsed, Rational::<i64>::new(5, 2));
//! assert_eq!(cursor, " and more");
//! ```

pub mod codec;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{parse_fraction, FormatOptions, FormatStyle, Radix};
    pub use crate::numeric::{
        rational, rational_int, NumericError, NumericResult, ParseErrorKind, Rational, Rational32,
        Rational64, URational32, URational64, Word,
    };
}
