use pretty_assertions::assert_eq;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_stops_at_end() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn snapshot_restores_position() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance();
    let saved = cursor;
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), b'd');
    cursor = saved;
    assert_eq!(cursor.current(), b'b');
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Prefix Matching ===

#[test]
fn starts_with_checks_unconsumed_input() {
    let mut cursor = Cursor::new("<=>");
    assert!(cursor.starts_with(b"<="));
    assert!(!cursor.starts_with(b"=>"));
    cursor.advance();
    assert!(cursor.starts_with(b"=>"));
    assert!(!cursor.starts_with(b"=>>"));
}

#[test]
fn starts_with_empty_needle_is_true() {
    let cursor = Cursor::new("");
    assert!(cursor.starts_with(b""));
}

// === Slice & Span ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn span_from_covers_start_to_current() {
    let mut cursor = Cursor::new("let x");
    for _ in 0..3 {
        cursor.advance();
    }
    let span = cursor.span_from(0);
    assert_eq!(span.as_str(), "let");
    assert_eq!(span.offset(), 0);
    assert_eq!(span.len(), 3);
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_multibyte_sequence() {
    let mut cursor = Cursor::new("\u{e9}x");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

// === Line Ends ===

#[test]
fn eat_until_line_end_stops_before_lf() {
    let mut cursor = Cursor::new("# note\nnext");
    cursor.eat_until_line_end_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn eat_until_line_end_stops_before_cr() {
    let mut cursor = Cursor::new("# note\r\nnext");
    cursor.eat_until_line_end_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_line_end_without_terminator_reaches_eof() {
    let mut cursor = Cursor::new("# trailing comment");
    cursor.eat_until_line_end_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 18);
}

#[test]
fn eat_until_line_end_from_middle() {
    let mut cursor = Cursor::new("ab\ncd\nef");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    cursor.eat_until_line_end_or_eof();
    assert_eq!(cursor.pos(), 5);
}
