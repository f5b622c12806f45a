// ============================================================================
// Numeric Errors
// Error types for rational arithmetic, casts and parsing
// ============================================================================

use std::fmt;

/// What went wrong while reading a fraction from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No leading integer where the numerator should be
    MissingNumerator,
    /// A `/` was read but no integer follows it
    MissingDenominator,
    /// The digits do not fit the word type
    OutOfRange,
    /// A complete fraction was read but more input follows
    TrailingInput,
}

/// Errors that can occur during rational arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the word type's maximum
    Overflow,
    /// Result below the word type's minimum
    Underflow,
    /// Integral cast of an infinite or NaN value
    DivisionByZero,
    /// Malformed configuration value (e.g. a format spec)
    InvalidInput,
    /// Text could not be read as a fraction
    ParseError(ParseErrorKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingNumerator => write!(f, "expected an integer numerator"),
            ParseErrorKind::MissingDenominator => {
                write!(f, "expected an integer denominator after '/'")
            },
            ParseErrorKind::OutOfRange => write!(f, "integer out of range for word type"),
            ParseErrorKind::TrailingInput => write!(f, "unexpected input after fraction"),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ParseError(kind) => write!(f, "parse error: {}", kind),
        }
    }
}

impl std::error::Error for NumericError {}

impl From<ParseErrorKind> for NumericError {
    fn from(kind: ParseErrorKind) -> Self {
        NumericError::ParseError(kind)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
