//! ASCII character classes used by the recognizers.

/// Radix in effect while delimiting a numeral.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum DigitBase {
    Decimal,
    Octal,
    Hex,
}

/// Space, tab, carriage return, line feed.
#[inline]
pub(super) fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub(super) fn is_newline(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

#[inline]
pub(super) fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Digit membership for `base`.
///
/// The decimal class also admits `e`, `E`, `+` and `-`, so exponents pass
/// without being validated: `1e`, `3-12+e` and `1e+5` all count as one
/// numeral. The scanner only delimits numerals; it never evaluates them.
#[inline]
pub(super) fn is_digit(c: u8, base: DigitBase) -> bool {
    match base {
        // Any letter, not just a-f.
        DigitBase::Hex => c.is_ascii_alphanumeric(),
        DigitBase::Octal => matches!(c, b'0'..=b'7'),
        DigitBase::Decimal => c.is_ascii_digit() || matches!(c, b'e' | b'E' | b'+' | b'-'),
    }
}

/// Base selected by the byte that follows a leading `0`.
///
/// The octal test runs first and claims everything except `.`, so the hex
/// branch can never fire and `0x1F` delimits as `0` followed by `x1F`.
#[inline]
pub(super) fn leading_zero_base(next: u8) -> DigitBase {
    if next != b'.' {
        DigitBase::Octal
    } else if next == b'x' {
        DigitBase::Hex
    } else {
        DigitBase::Decimal
    }
}
