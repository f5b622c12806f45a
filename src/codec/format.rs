// ============================================================================
// Rational Formatting
// Default `n/d` rendering, radix traits and configurable fraction style
// ============================================================================

use crate::numeric::{NumericError, NumericResult, Rational, Word};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Format Options
// ============================================================================

/// Overall layout of the rendered fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatStyle {
    /// `n`, or `n/d` when the denominator is not 1
    #[default]
    Default,

    /// Like `Default`, plus the sign / denominator / spacing flags
    Fraction,
}

/// Base used for numerator and denominator digits.
///
/// In the default style a negative numerator prints the way the word itself
/// does (two's complement for `x`, `o` and `b`); fraction style always
/// writes a sign followed by the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Radix {
    #[default]
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

/// Configuration for [`Rational::to_string_with`].
///
/// Can be built with the builder methods or parsed from a compact format
/// string: any of the flags `+` (sign), `#` (always show denominator) and
/// ` ` (spaced separator), followed by one type character: `d` (default),
/// `f` (fraction), `x`, `X`, `o` or `b` (default style in that radix).
///
/// # Example
/// ```
/// use fixed_rational::codec::FormatOptions;
/// use fixed_rational::numeric::Rational;
///
/// let opts: FormatOptions = "+#f".parse().unwrap();
/// assert_eq!(Rational::new(2i32, 1).to_string_with(&opts), "+2/1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Layout of the output
    pub style: FormatStyle,

    /// Prefix positive numerators with `+` (fraction style only)
    pub show_sign: bool,

    /// Print `/1` for integers too (fraction style only)
    pub always_show_denominator: bool,

    /// Use ` / ` instead of `/` (fraction style only)
    pub spaced: bool,

    /// Digit base
    pub radix: Radix,
}

impl FormatOptions {
    /// Default style, decimal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction style with no flags set.
    pub fn fraction() -> Self {
        Self {
            style: FormatStyle::Fraction,
            ..Self::default()
        }
    }

    /// Builder method: Force a leading `+` on positive numerators
    pub fn with_sign(mut self) -> Self {
        self.show_sign = true;
        self
    }

    /// Builder method: Always print the denominator
    pub fn with_denominator(mut self) -> Self {
        self.always_show_denominator = true;
        self
    }

    /// Builder method: Surround the separator with spaces
    pub fn with_spacing(mut self) -> Self {
        self.spaced = true;
        self
    }

    /// Builder method: Set the digit base
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// `InvalidInput` if a fraction-only flag is set in default style.
    pub fn validate(&self) -> NumericResult<()> {
        let has_flags = self.show_sign || self.always_show_denominator || self.spaced;
        if has_flags && self.style != FormatStyle::Fraction {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }
}

impl FromStr for FormatOptions {
    type Err = NumericError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut options = Self::default();
        let mut chars = spec.chars();

        let mut type_char = None;
        for c in chars.by_ref() {
            match c {
                '+' => options.show_sign = true,
                '#' => options.always_show_denominator = true,
                ' ' => options.spaced = true,
                other => {
                    type_char = Some(other);
                    break;
                },
            }
        }

        match type_char {
            None | Some('d') => {},
            Some('f') => options.style = FormatStyle::Fraction,
            Some('x') => options.radix = Radix::LowerHex,
            Some('X') => options.radix = Radix::UpperHex,
            Some('o') => options.radix = Radix::Octal,
            Some('b') => options.radix = Radix::Binary,
            Some(_) => return Err(NumericError::InvalidInput),
        }

        if chars.next().is_some() {
            return Err(NumericError::InvalidInput);
        }

        options.validate()?;
        Ok(options)
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn digits<U: Word>(value: U, radix: Radix) -> String {
    match radix {
        Radix::Decimal => value.to_string(),
        Radix::LowerHex => format!("{:x}", value),
        Radix::UpperHex => format!("{:X}", value),
        Radix::Octal => format!("{:o}", value),
        Radix::Binary => format!("{:b}", value),
    }
}

fn render<T: Word>(value: &Rational<T>, options: &FormatOptions) -> String {
    if options.style == FormatStyle::Default {
        return match options.radix {
            Radix::Decimal => value.to_string(),
            Radix::LowerHex => format!("{:x}", value),
            Radix::UpperHex => format!("{:X}", value),
            Radix::Octal => format!("{:o}", value),
            Radix::Binary => format!("{:b}", value),
        };
    }

    let (numerator, denominator) = value.into_raw();
    let mut out = String::new();

    if numerator < T::zero() {
        out.push('-');
    } else if options.show_sign && numerator > T::zero() {
        out.push('+');
    }

    out.push_str(&digits(numerator.magnitude(), options.radix));
    if options.always_show_denominator || !denominator.is_one() {
        out.push_str(if options.spaced { " / " } else { "/" });
        out.push_str(&digits(denominator, options.radix));
    }

    out
}

/// `Display` adapter returned by [`Rational::display_with`].
///
/// Width, fill and alignment from the outer format string are applied to
/// the whole rendered fraction.
pub struct Formatted<'a, T> {
    value: &'a Rational<T>,
    options: &'a FormatOptions,
}

impl<T: Word> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&render(self.value, self.options))
    }
}

impl<T: Word> Rational<T> {
    /// Render with explicit options.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        render(self, options)
    }

    /// Borrowing `Display` adapter that renders with `options`.
    pub fn display_with<'a>(&'a self, options: &'a FormatOptions) -> Formatted<'a, T> {
        Formatted {
            value: self,
            options,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

// Numerator and denominator are each written with the caller's formatter, so
// width, fill, sign and `#` apply per component exactly as for the word.
macro_rules! impl_formatting {
    ($($fmt_trait:ident),*) => {$(
        impl<T: Word> fmt::$fmt_trait for Rational<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$fmt_trait::fmt(&self.numerator(), f)?;
                if !self.denominator().is_one() {
                    f.write_str("/")?;
                    fmt::$fmt_trait::fmt(&self.denominator(), f)?;
                }
                Ok(())
            }
        }
    )*};
}

impl_formatting!(Display, LowerHex, UpperHex, Octal, Binary);

impl<T: Word> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rational<{}>({}/{})",
            T::NAME,
            self.numerator(),
            self.denominator()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
