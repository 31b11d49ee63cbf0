//! Token identities.
//!
//! A token is a signed integer. Negative values name the built-in classes the
//! scanner produces on its own; non-negative values are whatever the
//! embedding parser registered for its keywords and symbols.

use std::fmt;

/// Signed token identity returned by [`Scanner::scan`](crate::Scanner::scan).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Token(i32);

impl Token {
    // === Built-in classes (negative ids) ===

    /// Input exhausted. Repeated scans keep returning it.
    pub const END_OF_FILE: Token = Token(-1);
    /// Letter-initial word that is not a registered lexeme.
    pub const IDENTIFIER: Token = Token(-2);
    /// Numeral, including sign, fraction and loose exponent characters.
    pub const DIGITS: Token = Token(-3);
    /// Double-quoted string literal, quotes included.
    pub const STRING: Token = Token(-4);
    /// Pound comment. Reserved; comments are skipped, never emitted.
    pub const COMMENTS: Token = Token(-5);
    /// String literal left open at end of input.
    pub const INVALID: Token = Token(-6);
    /// Character no recognizer accepts. Only produced with
    /// [`ScanFlags::REPORT_UNRECOGNIZED`](crate::ScanFlags::REPORT_UNRECOGNIZED).
    pub const UNRECOGNIZED: Token = Token(-7);

    /// Wrap a raw id. Non-negative ids are caller-defined.
    #[inline]
    pub const fn new(id: i32) -> Self {
        Token(id)
    }

    /// The raw signed id.
    #[inline]
    pub const fn id(self) -> i32 {
        self.0
    }

    /// Returns `true` for the reserved negative ids.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_end_of_file(self) -> bool {
        self.0 == Self::END_OF_FILE.0
    }

    /// Human-readable name of a built-in class.
    pub fn builtin_name(self) -> Option<&'static str> {
        match self {
            Self::END_OF_FILE => Some("end of file"),
            Self::IDENTIFIER => Some("identifier"),
            Self::DIGITS => Some("digits"),
            Self::STRING => Some("string"),
            Self::COMMENTS => Some("comments"),
            Self::INVALID => Some("invalid"),
            Self::UNRECOGNIZED => Some("unrecognized"),
            _ => None,
        }
    }
}

impl From<i32> for Token {
    fn from(id: i32) -> Self {
        Token(id)
    }
}

impl From<Token> for i32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "token {}", self.0),
        }
    }
}
