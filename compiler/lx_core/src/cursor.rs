//! Byte cursor over borrowed source text.
//!
//! The cursor advances through the source byte-by-byte. Reads at or past the
//! end of the source return `0x00`, the end-of-input sentinel, so recognizers
//! dispatch on the current byte without bounds checks of their own. The
//! cursor never moves past the end of the source.
//!
//! # Interior Null Bytes
//!
//! A `0x00` inside the source reads the same as the sentinel. Use
//! [`Cursor::is_eof`] to tell them apart: it compares the position against
//! the source length instead of looking at the byte.

use crate::TokenSpan;

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a recognizer that needs to back out takes a
/// snapshot (`let saved = cursor;`) and restores it (`cursor = saved;`).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Borrowed source text. Must outlive every span produced from it.
    source: &'a str,
    /// Offset of the current (lookahead) byte.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Advance by one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` if the unconsumed input begins with `needle`.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.source.as_bytes()[self.pos..].starts_with(needle)
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Token boundaries produced by the scanner always do.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        &self.source[start..end]
    }

    /// Span of the text from `start` up to the current position.
    pub fn span_from(&self, start: usize) -> TokenSpan<'a> {
        TokenSpan::new(start, self.slice(start, self.pos))
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, clamped to end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source.len());
    }

    /// Advance to the next `\r` or `\n`, or to end of input.
    ///
    /// The line terminator itself is not consumed. Never reads past the end
    /// of the source.
    pub fn eat_until_line_end_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr2(b'\r', b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }
}

#[cfg(test)]
mod tests;
