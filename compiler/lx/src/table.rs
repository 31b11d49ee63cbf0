//! Registration tables for lexemes and symbols.
//!
//! Both tables hold `(text, precedence, token)` entries and stay sorted
//! ascending by precedence after every insertion. The sort is stable, so
//! entries with equal precedence keep their insertion order.
//!
//! Re-sorting on each insert costs `O(n log n)` per call. Tables are small
//! and built once before scanning starts.

use crate::error::{EntryKind, RegisterError};
use crate::Token;

/// One registered lexeme or symbol.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Entry {
    text: Box<str>,
    precedence: i32,
    token: Token,
}

impl Entry {
    pub(crate) fn new(text: &str, precedence: i32, token: Token) -> Self {
        Self {
            text: text.into(),
            precedence,
            token,
        }
    }

    /// The registered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sort key: lower precedence is tried first.
    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    /// Token produced when this entry matches.
    pub fn token(&self) -> Token {
        self.token
    }
}

/// Precedence-ordered collection of entries.
#[derive(Clone, Debug, Default)]
pub(crate) struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Append `entry` and restore precedence order.
    pub(crate) fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.entries.sort_by_key(Entry::precedence);
    }

    /// Entries in match order.
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// First entry, in match order, whose text equals `text` exactly.
    pub(crate) fn find_exact(&self, text: &[u8]) -> Option<&Entry> {
        self.entries.iter().find(|e| e.text.as_bytes() == text)
    }
}

/// Check an entry before it reaches a table.
pub(crate) fn validate(kind: EntryKind, text: &str, token: Token) -> Result<(), RegisterError> {
    if text.is_empty() {
        return Err(RegisterError::EmptyText { kind });
    }
    if token.is_builtin() {
        return Err(RegisterError::ReservedToken {
            kind,
            text: text.into(),
            id: token.id(),
        });
    }
    if kind == EntryKind::Lexeme && !is_identifier(text) {
        return Err(RegisterError::NotAnIdentifier { text: text.into() });
    }
    Ok(())
}

/// Could identifier scanning produce exactly this text?
fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic() && rest.iter().all(u8::is_ascii_alphanumeric)
        }
        None => false,
    }
}
