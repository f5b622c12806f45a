// ============================================================================
// Numeric Module
// Exact rational arithmetic over fixed-width integer words
// ============================================================================
//
// This module provides:
// - Rational<T>: reduced fraction over any primitive integer word
// - Word: the integral word bound (signed and unsigned primitives)
// - NumericError: Error types for arithmetic, casts and parsing
// - Rational32/Rational64/URational32/URational64 aliases
//
// Design principles:
// - Canonical form after every operation (denominator >= 0, gcd == 1)
// - Division by zero yields infinity/NaN values, not errors
// - checked_* methods return Result; operator traits panic on overflow
// - Mixed-width operands widen through an explicit table (see widen.rs)

mod arith;
mod casts;
mod cmp;
mod errors;
mod rational;
mod widen;
mod word;

pub use errors::{NumericError, NumericResult, ParseErrorKind};
pub use rational::{rational, rational_int, Rational, Rational32, Rational64, URational32, URational64};
pub use word::Word;
