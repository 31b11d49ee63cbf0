//! Registration errors.
//!
//! Scanning itself never fails: every outcome of [`Scanner::scan`] is a
//! token id. Only building the tables can be rejected.
//!
//! [`Scanner::scan`]: crate::Scanner::scan

use std::fmt;

/// Which table a rejected entry was headed for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntryKind {
    Lexeme,
    Symbol,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Lexeme => f.write_str("lexeme"),
            EntryKind::Symbol => f.write_str("symbol"),
        }
    }
}

/// Why a lexeme or symbol could not be registered.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegisterError {
    /// Empty text would match without consuming input.
    #[error("cannot register an empty {kind}")]
    EmptyText { kind: EntryKind },

    /// Negative ids belong to the built-in token classes.
    #[error("{kind} `{text}` uses token id {id}, which is reserved for built-in token classes")]
    ReservedToken {
        kind: EntryKind,
        text: Box<str>,
        id: i32,
    },

    /// Lexemes are looked up against identifier text, so a lexeme that is not
    /// an ASCII letter followed by ASCII letters or digits can never match.
    #[error("lexeme `{text}` is not an identifier and would never be matched")]
    NotAnIdentifier { text: Box<str> },
}
