//! Numeric literal predicates
//!
//! Integer literals are checked against a base and a bit width; float
//! literals against a bit width. Out-of-range format parameters make the
//! predicate fail rather than panic.
//!
//! # Integer bases
//!
//! - `2..=36`: digits in that radix, no prefix.
//! - `0`: radix inferred from the prefix (`0x` hex, `0o` octal, `0b` binary,
//!   a bare leading `0` octal, otherwise decimal). Only in this mode may `_`
//!   separate digits, as in `1_000` or `0x_ff`.
//!
//! A bit width of `0` means 64.

use crate::foundation::{FormatError, Predicate};

// ============================================================================
// INTEGER FORMAT
// ============================================================================

/// Base and bit width for integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntFormat {
    base: u32,
    bits: u32,
}

impl IntFormat {
    /// Plain decimal, 64 bits.
    pub const DECIMAL_64: Self = Self { base: 10, bits: 64 };

    /// Creates a format, rejecting unusable parameters.
    pub fn new(base: u32, bits: u32) -> Result<Self, FormatError> {
        if base == 1 || base > 36 {
            return Err(FormatError::InvalidBase(base));
        }
        let bits = match bits {
            0 => 64,
            1..=64 => bits,
            _ => return Err(FormatError::InvalidBitSize(bits)),
        };
        Ok(Self { base, bits })
    }

    /// The configured base; `0` means inferred from the prefix.
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The bit width, always within `1..=64`.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    fn fits_signed(self, negative: bool, magnitude: u64) -> bool {
        let limit = 1u64 << (self.bits - 1);
        if negative {
            magnitude <= limit
        } else {
            magnitude < limit
        }
    }

    fn fits_unsigned(self, magnitude: u64) -> bool {
        self.bits == 64 || magnitude < (1u64 << self.bits)
    }
}

impl Default for IntFormat {
    fn default() -> Self {
        Self::DECIMAL_64
    }
}

// ============================================================================
// SIGNED / UNSIGNED INTEGERS
// ============================================================================

/// Passes when the input is a signed integer literal (optional `+`/`-`)
/// that fits the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedInt {
    /// Base and bit width.
    pub format: IntFormat,
}

impl SignedInt {
    #[must_use]
    pub fn new(format: IntFormat) -> Self {
        Self { format }
    }
}

impl Predicate for SignedInt {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        let (negative, digits) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };
        parse_magnitude(digits, self.format.base)
            .is_some_and(|magnitude| self.format.fits_signed(negative, magnitude))
    }
}

/// Passes when the input is an unsigned integer literal that fits the
/// format. Any sign character, `+` included, fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnsignedInt {
    /// Base and bit width.
    pub format: IntFormat,
}

impl UnsignedInt {
    #[must_use]
    pub fn new(format: IntFormat) -> Self {
        Self { format }
    }
}

impl Predicate for UnsignedInt {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        parse_magnitude(input, self.format.base)
            .is_some_and(|magnitude| self.format.fits_unsigned(magnitude))
    }
}

/// Returns `true` if `value` is a signed integer in `base` fitting `bits`.
#[must_use]
pub fn is_int(value: &str, base: u32, bits: u32) -> bool {
    match IntFormat::new(base, bits) {
        Ok(format) => SignedInt::new(format).test(value),
        Err(err) => {
            tracing::debug!(%err, "integer predicate called with unusable format");
            false
        }
    }
}

/// Returns `true` if `value` is an unsigned integer in `base` fitting `bits`.
#[must_use]
pub fn is_uint(value: &str, base: u32, bits: u32) -> bool {
    match IntFormat::new(base, bits) {
        Ok(format) => UnsignedInt::new(format).test(value),
        Err(err) => {
            tracing::debug!(%err, "unsigned predicate called with unusable format");
            false
        }
    }
}

/// Parses an unsigned digit string. Signs must already be stripped; a sign
/// left in `digits` fails.
fn parse_magnitude(digits: &str, base: u32) -> Option<u64> {
    if base != 0 {
        return from_radix(digits, base);
    }

    let (radix, body) = infer_radix(digits);
    if body.contains('_') {
        if !underscores_ok(digits) {
            return None;
        }
        let cleaned: String = body.chars().filter(|&c| c != '_').collect();
        from_radix(&cleaned, radix)
    } else {
        from_radix(body, radix)
    }
}

// `from_str_radix` accepts a leading `+`, which a magnitude must not carry.
fn from_radix(digits: &str, radix: u32) -> Option<u64> {
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn infer_radix(digits: &str) -> (u32, &str) {
    let bytes = digits.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        return match bytes[1].to_ascii_lowercase() {
            b'x' => (16, &digits[2..]),
            b'o' => (8, &digits[2..]),
            b'b' => (2, &digits[2..]),
            _ => (8, &digits[1..]),
        };
    }
    (10, digits)
}

/// Underscores may only sit between digits, or right after a `0x`/`0o`/`0b`
/// prefix, and never at the end.
fn underscores_ok(digits: &str) -> bool {
    #[derive(PartialEq)]
    enum Prev {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = digits.as_bytes();
    let mut prev = Prev::Start;
    let mut hex = false;
    let mut rest = bytes;

    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        hex = bytes[1].to_ascii_lowercase() == b'x';
        prev = Prev::Digit;
        rest = &bytes[2..];
    }

    for &b in rest {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            prev = Prev::Digit;
        } else if b == b'_' {
            if prev != Prev::Digit {
                return false;
            }
            prev = Prev::Underscore;
        } else {
            if prev == Prev::Underscore {
                return false;
            }
            prev = Prev::Other;
        }
    }
    prev != Prev::Underscore
}

// ============================================================================
// FLOATS
// ============================================================================

/// Width of a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatBits {
    /// `f32`
    F32,
    /// `f64`
    #[default]
    F64,
}

impl TryFrom<u32> for FloatBits {
    type Error = FormatError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Self::F32),
            64 => Ok(Self::F64),
            _ => Err(FormatError::InvalidFloatBitSize(bits)),
        }
    }
}

/// Passes when the input is a decimal float literal representable at the
/// configured width.
///
/// `inf`, `infinity` and `nan` (any case, optional sign) are accepted; a
/// finite literal that overflows to infinity is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Float {
    /// Target width.
    pub bits: FloatBits,
}

impl Float {
    #[must_use]
    pub fn new(bits: FloatBits) -> Self {
        Self { bits }
    }
}

impl Predicate for Float {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        let representable = match self.bits {
            FloatBits::F32 => input.parse::<f32>().map(|v| !v.is_infinite()),
            FloatBits::F64 => input.parse::<f64>().map(|v| !v.is_infinite()),
        };
        match representable {
            Ok(true) => true,
            Ok(false) => is_infinity_literal(input),
            Err(_) => false,
        }
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Returns `true` if `value` is a float literal representable in `bits`
/// (32 or 64).
#[must_use]
pub fn is_float(value: &str, bits: u32) -> bool {
    match FloatBits::try_from(bits) {
        Ok(bits) => Float::new(bits).test(value),
        Err(err) => {
            tracing::debug!(%err, "float predicate called with unusable width");
            false
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
