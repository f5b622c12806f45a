// ============================================================================
// Codec Module
// Text encoding and decoding for Rational<T>
// ============================================================================
//
// This module provides:
// - Display / LowerHex / UpperHex / Octal / Binary in the default `n/d` style
// - FormatOptions: configurable fraction style (sign, denominator, spacing)
// - parse_fraction: cursor-based reader that consumes exactly one fraction
// - FromStr for whole-string parsing
// - Serialize / Deserialize as strings (requires "serde" feature)

mod format;
mod parse;

#[cfg(feature = "serde")]
mod serde_impl;

pub use format::{FormatOptions, FormatStyle, Formatted, Radix};
pub use parse::parse_fraction;
