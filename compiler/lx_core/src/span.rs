//! Zero-copy token spans.
//!
//! A [`TokenSpan`] is a view into the original source: the byte offset where
//! a token starts and the borrowed text it covers. It never points into the
//! scanner's scratch buffer, so clearing that buffer on the next scan cannot
//! invalidate a span the caller is still holding.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// Borrowed view of matched source text.
///
/// # Equality
///
/// Two spans are equal when they cover the same bytes, wherever those bytes
/// sit in the source: the `let` at offset 0 equals the `let` at offset 40.
/// Compare [`offset()`](Self::offset) explicitly for positional identity.
///
/// # Copy
///
/// Spans are [`Copy`]. A copy is another view of the same source text and is
/// valid for as long as the source is.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenSpan<'a> {
    offset: usize,
    text: &'a str,
}

impl<'a> TokenSpan<'a> {
    /// Create a span for `text` starting at byte `offset` of its source.
    #[inline]
    pub const fn new(offset: usize, text: &'a str) -> Self {
        Self { offset, text }
    }

    /// Byte offset of the first byte in the source.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset one past the last byte in the source.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The covered text, borrowed from the source.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Source byte range covered by this span.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

impl PartialEq for TokenSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TokenSpan<'_> {}

impl Hash for TokenSpan<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialEq<str> for TokenSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for TokenSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for TokenSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
