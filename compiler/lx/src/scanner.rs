//! The scanning engine.
//!
//! [`Scanner`] turns borrowed source text into one [`Token`] per
//! [`scan`](Scanner::scan) call, under the lexemes, symbols and
//! [`ScanFlags`] the caller registered.
//!
//! # Recognition Order
//!
//! Each scan skips trivia (whitespace, and `#` comments when enabled), then
//! tries the recognizers in a fixed order and stops at the first that
//! decides:
//!
//! 1. digits (with [`ScanFlags::DIGITS`])
//! 2. string (with [`ScanFlags::STRINGS`])
//! 3. symbol
//! 4. identifier / lexeme
//!
//! A recognizer that starts matching but cannot finish backs out to the
//! token start, leaving the input for the next recognizer.
//!
//! # Symbol Precedence
//!
//! Symbols are tried in ascending precedence and the first whose whole text
//! matches wins. There is no longest-match rule: with `<` registered below
//! `<=`, the input `<=` scans as `<` then `=`. Register `<=` with the lower
//! precedence to prefer it.
//!
//! # Unrecognized Input
//!
//! When no recognizer accepts the current character the scan reports
//! [`Token::END_OF_FILE`] without consuming it, so the stream ends there.
//! [`ScanFlags::REPORT_UNRECOGNIZED`] instead consumes the character and
//! reports [`Token::UNRECOGNIZED`].

mod classify;

use lx_core::{Cursor, TextBuffer, TokenSpan};
use tracing::{debug, trace};

use crate::error::{EntryKind, RegisterError};
use crate::table::{self, Entry, Table};
use crate::{ScanFlags, Token};
use self::classify::{is_digit, is_letter, is_newline, is_whitespace, leading_zero_base, DigitBase};

/// Configurable scanner over borrowed source text.
///
/// The source must outlive the scanner and every [`TokenSpan`] it hands out.
/// The scanner exclusively owns its text buffer and both tables; they are
/// released together when it is dropped.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Offset where the most recent token starts.
    token_start: usize,
    /// 1-based.
    line: u32,
    flags: ScanFlags,
    /// Text of the token being matched. Cleared, not freed, per scan.
    buffer: TextBuffer,
    lexemes: Table,
    symbols: Table,
}

/// One token produced by [`Scanner::tokens`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScannedToken<'src> {
    pub token: Token,
    pub span: TokenSpan<'src>,
    /// Line counter after the token was scanned.
    pub line: u32,
}

impl<'src> Scanner<'src> {
    /// Create a scanner at the start of `source` with empty tables.
    pub fn new(source: &'src str, flags: ScanFlags) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            line: 1,
            flags,
            buffer: TextBuffer::new(),
            lexemes: Table::default(),
            symbols: Table::default(),
        }
    }

    /// Register a keyword.
    ///
    /// A scanned identifier whose text equals `text` is reported as `token`
    /// instead of [`Token::IDENTIFIER`].
    pub fn reserve(
        &mut self,
        text: &str,
        precedence: i32,
        token: Token,
    ) -> Result<(), RegisterError> {
        table::validate(EntryKind::Lexeme, text, token)?;
        debug!(text, precedence, token = token.id(), "reserve lexeme");
        self.lexemes.insert(Entry::new(text, precedence, token));
        Ok(())
    }

    /// Register an operator or punctuation sequence.
    ///
    /// See the module docs for how `precedence` resolves overlapping symbols.
    pub fn register_symbol(
        &mut self,
        text: &str,
        precedence: i32,
        token: Token,
    ) -> Result<(), RegisterError> {
        table::validate(EntryKind::Symbol, text, token)?;
        debug!(text, precedence, token = token.id(), "register symbol");
        self.symbols.insert(Entry::new(text, precedence, token));
        Ok(())
    }

    /// Advance past the next token and classify it.
    ///
    /// After [`Token::END_OF_FILE`], further calls keep returning it.
    pub fn scan(&mut self) -> Token {
        self.buffer.clear();
        self.skip_trivia();
        self.token_start = self.cursor.pos();

        let token = self.recognize();
        trace!(
            token = token.id(),
            offset = self.token_start,
            len = self.cursor.pos() - self.token_start,
            line = self.line,
            "scan"
        );
        token
    }

    /// Line number at the current scan position, 1-based.
    ///
    /// Line breaks inside string literals count too, so after a multi-line
    /// string the line is that of the closing quote.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source text of the most recent token.
    pub fn span(&self) -> TokenSpan<'src> {
        self.cursor.span_from(self.token_start)
    }

    /// Text assembled for the most recent token.
    ///
    /// Holds the same bytes as [`span()`](Self::span), but is overwritten by
    /// the next scan.
    pub fn text(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn flags(&self) -> ScanFlags {
        self.flags
    }

    /// Registered lexemes in lookup order.
    pub fn lexemes(&self) -> &[Entry] {
        self.lexemes.entries()
    }

    /// Registered symbols in match order.
    pub fn symbols(&self) -> &[Entry] {
        self.symbols.entries()
    }

    /// Iterate the remaining tokens, stopping before end of file.
    ///
    /// The scanner stays usable afterwards; `line()` and `span()` reflect
    /// the last scan the iterator performed.
    pub fn tokens(&mut self) -> Tokens<'_, 'src> {
        Tokens { scanner: self }
    }

    // ─── Dispatch ──────────────────────────────────────────────────────

    fn recognize(&mut self) -> Token {
        if self.cursor.is_eof() {
            return Token::END_OF_FILE;
        }
        if let Some(token) = self.scan_digits() {
            return token;
        }
        if let Some(token) = self.scan_string() {
            return token;
        }
        if let Some(token) = self.scan_symbol() {
            return token;
        }
        if let Some(token) = self.scan_identifier() {
            return token;
        }
        self.unrecognized()
    }

    /// Append the current byte to the buffer and consume it.
    #[inline]
    fn take(&mut self) {
        self.buffer.push(self.cursor.current());
        self.cursor.advance();
    }

    /// Restore the cursor and buffer to `saved`.
    fn back_out(&mut self, saved: Cursor<'src>) -> Option<Token> {
        self.cursor = saved;
        self.buffer.truncate(saved.pos() - self.token_start);
        None
    }

    // ─── Trivia ────────────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        self.skip_whitespace();
        if self.flags.contains(ScanFlags::POUND_COMMENTS) {
            while self.cursor.current() == b'#' {
                // Stops before the line break so whitespace skipping counts it.
                self.cursor.eat_until_line_end_or_eof();
                self.skip_whitespace();
            }
        }
    }

    /// Skip whitespace, counting each run of consecutive `\r`/`\n` as one line.
    fn skip_whitespace(&mut self) {
        let mut previous = b' ';
        while !self.cursor.is_eof() {
            let c = self.cursor.current();
            if !is_whitespace(c) {
                break;
            }
            if is_newline(c) && !is_newline(previous) {
                self.line += 1;
            }
            previous = c;
            self.cursor.advance();
        }
    }

    // ─── Digits ────────────────────────────────────────────────────────

    fn scan_digits(&mut self) -> Option<Token> {
        if !self.flags.contains(ScanFlags::DIGITS) {
            return None;
        }
        let saved = self.cursor;

        if self.cursor.current() == b'-' {
            self.take();
        }
        let first = self.cursor.current();
        if !first.is_ascii_digit() && first != b'.' {
            return self.back_out(saved);
        }

        // Guards against accepting a lone `.` or `-.`.
        let mut has_digits = false;
        let base = if first == b'0' {
            has_digits = true;
            self.take();
            leading_zero_base(self.cursor.current())
        } else {
            DigitBase::Decimal
        };

        let c = self.cursor.current();
        if !has_digits || is_digit(c, DigitBase::Decimal) || c == b'.' {
            let mut periods = 0u32;
            loop {
                let c = self.cursor.current();
                has_digits |= is_digit(c, base);
                if c == b'.' {
                    periods += 1;
                }
                self.take();

                let next = self.cursor.current();
                if is_digit(next, base) {
                    continue;
                }
                if base == DigitBase::Decimal && next == b'.' && periods == 0 {
                    continue;
                }
                break;
            }
        }

        if has_digits {
            Some(Token::DIGITS)
        } else {
            self.back_out(saved)
        }
    }

    // ─── Strings ───────────────────────────────────────────────────────

    fn scan_string(&mut self) -> Option<Token> {
        if !self.flags.contains(ScanFlags::STRINGS) || self.cursor.current() != b'"' {
            return None;
        }
        let escapes = self.flags.contains(ScanFlags::STRING_ESCAPES);

        self.take(); // opening quote
        let mut previous = b'"';
        loop {
            if self.cursor.is_eof() {
                debug!(offset = self.token_start, line = self.line, "unterminated string");
                return Some(Token::INVALID);
            }
            match self.cursor.current() {
                b'"' => {
                    self.take();
                    return Some(Token::STRING);
                }
                b'\\' if escapes => {
                    self.take_string_byte(&mut previous);
                    // The escaped byte, whatever it is.
                    if !self.cursor.is_eof() {
                        self.take_string_byte(&mut previous);
                    }
                }
                _ => self.take_string_byte(&mut previous),
            }
        }
    }

    /// Consume one literal byte, counting `\r`/`\n` runs like whitespace does.
    fn take_string_byte(&mut self, previous: &mut u8) {
        let c = self.cursor.current();
        if is_newline(c) && !is_newline(*previous) {
            self.line += 1;
        }
        *previous = c;
        self.take();
    }

    // ─── Symbols ───────────────────────────────────────────────────────

    fn scan_symbol(&mut self) -> Option<Token> {
        let cursor = self.cursor;
        let (token, len) = self
            .symbols
            .entries()
            .iter()
            .find(|entry| cursor.starts_with(entry.text().as_bytes()))
            .map(|entry| (entry.token(), entry.text().len()))?;
        for _ in 0..len {
            self.take();
        }
        Some(token)
    }

    // ─── Identifiers ───────────────────────────────────────────────────

    fn scan_identifier(&mut self) -> Option<Token> {
        if !is_letter(self.cursor.current()) {
            return None;
        }
        loop {
            self.take();
            let c = self.cursor.current();
            if !is_letter(c) && !c.is_ascii_digit() {
                break;
            }
        }
        let token = self
            .lexemes
            .find_exact(self.buffer.as_bytes())
            .map_or(Token::IDENTIFIER, Entry::token);
        Some(token)
    }

    // ─── Fallback ──────────────────────────────────────────────────────

    fn unrecognized(&mut self) -> Token {
        let byte = self.cursor.current();
        if !self.flags.contains(ScanFlags::REPORT_UNRECOGNIZED) {
            debug!(
                byte,
                offset = self.token_start,
                line = self.line,
                "unrecognized byte ends the token stream"
            );
            return Token::END_OF_FILE;
        }
        let start = self.cursor.pos();
        self.cursor.advance_char();
        for &b in self.cursor.span_from(start).as_bytes() {
            self.buffer.push(b);
        }
        debug!(byte, offset = start, line = self.line, "unrecognized character");
        Token::UNRECOGNIZED
    }
}

/// Iterator over the remaining tokens of a [`Scanner`].
///
/// Created by [`Scanner::tokens`]. Yields every token before
/// [`Token::END_OF_FILE`], then stays exhausted.
#[derive(Debug)]
pub struct Tokens<'a, 'src> {
    scanner: &'a mut Scanner<'src>,
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = ScannedToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scanner.scan();
        if token.is_end_of_file() {
            return None;
        }
        Some(ScannedToken {
            token,
            span: self.scanner.span(),
            line: self.scanner.line,
        })
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
