//! End-to-end scanning through the public API.
//!
//! Each test sets up a scanner the way an embedding parser would, either
//! with registration calls or from a JSON [`ScannerConfig`], and checks the
//! full token stream.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lx::{ScanFlags, ScannedToken, Scanner, ScannerConfig, Token};
use pretty_assertions::assert_eq;

// -- Token ids of a small calculator language --

const LET: Token = Token::new(100);
const PRINT: Token = Token::new(101);
const IF: Token = Token::new(102);
const ASSIGN: Token = Token::new(200);
const PLUS: Token = Token::new(201);
const LESS: Token = Token::new(202);
const LESS_EQ: Token = Token::new(203);
const LPAREN: Token = Token::new(204);
const RPAREN: Token = Token::new(205);
const SEMI: Token = Token::new(206);

const CALC_CONFIG: &str = r#"{
    "digits": true,
    "strings": true,
    "string_escapes": true,
    "pound_comments": true,
    "lexemes": [
        { "text": "let", "token": 100 },
        { "text": "print", "token": 101 },
        { "text": "if", "token": 102 }
    ],
    "symbols": [
        { "text": "=", "precedence": 5, "token": 200 },
        { "text": "+", "precedence": 5, "token": 201 },
        { "text": "<", "precedence": 5, "token": 202 },
        { "text": "<=", "precedence": 1, "token": 203 },
        { "text": "(", "precedence": 5, "token": 204 },
        { "text": ")", "precedence": 5, "token": 205 },
        { "text": ";", "precedence": 5, "token": 206 }
    ]
}"#;

fn calc_scanner(source: &str) -> Scanner<'_> {
    let config: ScannerConfig = serde_json::from_str(CALC_CONFIG).unwrap();
    config.build(source).unwrap()
}

fn stream(mut scanner: Scanner<'_>) -> Vec<(Token, &str, u32)> {
    scanner
        .tokens()
        .map(|ScannedToken { token, span, line }| (token, span.as_str(), line))
        .collect()
}

// -- Distilled scenarios --

#[test]
fn bare_identifiers() {
    let mut scanner = Scanner::new("foo bar", ScanFlags::empty());
    assert_eq!(scanner.scan(), Token::IDENTIFIER);
    assert_eq!(scanner.span().as_str(), "foo");
    assert_eq!(scanner.scan(), Token::IDENTIFIER);
    assert_eq!(scanner.span().as_str(), "bar");
    assert_eq!(scanner.scan(), Token::END_OF_FILE);
}

#[test]
fn keyword_assignment() {
    let mut scanner = Scanner::new("let x = 10", ScanFlags::DIGITS);
    scanner.reserve("let", 0, Token::new(100)).unwrap();
    scanner.register_symbol("=", 0, Token::new(200)).unwrap();
    let ids: Vec<i32> = std::iter::from_fn(|| Some(scanner.scan()))
        .take_while(|t| !t.is_end_of_file())
        .map(Token::id)
        .collect();
    assert_eq!(ids, vec![100, -2, 200, -3]);
}

#[test]
fn escaped_string() {
    let source = r#""he said \"hi\"""#;
    let mut scanner = Scanner::new(source, ScanFlags::STRINGS | ScanFlags::STRING_ESCAPES);
    assert_eq!(scanner.scan(), Token::STRING);
    assert_eq!(scanner.span().as_str(), source);
    assert_eq!(scanner.text(), source.as_bytes());
    assert_eq!(scanner.scan(), Token::END_OF_FILE);
}

// -- A whole program --

#[test]
fn calculator_program() {
    let source = "\
# compute a bound
let limit = 0.5 + -3;\r
\r
if (limit <= 10) print \"small \\\"n\\\"\"; # done
";
    assert_eq!(
        stream(calc_scanner(source)),
        vec![
            (LET, "let", 2),
            (Token::IDENTIFIER, "limit", 2),
            (ASSIGN, "=", 2),
            (Token::DIGITS, "0.5", 2),
            (PLUS, "+", 2),
            (Token::DIGITS, "-3", 2),
            (SEMI, ";", 2),
            (IF, "if", 3),
            (LPAREN, "(", 3),
            (Token::IDENTIFIER, "limit", 3),
            (LESS_EQ, "<=", 3),
            (Token::DIGITS, "10", 3),
            (RPAREN, ")", 3),
            (PRINT, "print", 3),
            (Token::STRING, r#""small \"n\"""#, 3),
            (SEMI, ";", 3),
        ]
    );
}

#[test]
fn less_than_still_matches_alone() {
    assert_eq!(
        stream(calc_scanner("a<b")),
        vec![
            (Token::IDENTIFIER, "a", 1),
            (LESS, "<", 1),
            (Token::IDENTIFIER, "b", 1),
        ]
    );
}

#[test]
fn unterminated_string_then_end() {
    let mut scanner = calc_scanner("print \"oops");
    assert_eq!(scanner.scan(), PRINT);
    assert_eq!(scanner.scan(), Token::INVALID);
    assert_eq!(scanner.span().as_str(), "\"oops");
    assert_eq!(scanner.scan(), Token::END_OF_FILE);
    assert_eq!(scanner.scan(), Token::END_OF_FILE);
}

#[test]
fn stray_character_stops_the_stream() {
    let tokens = stream(calc_scanner("let a = 1 @ let b = 2"));
    assert_eq!(tokens.last(), Some(&(Token::DIGITS, "1", 1)));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn stray_character_reported_when_enabled() {
    let mut config: ScannerConfig = serde_json::from_str(CALC_CONFIG).unwrap();
    config.report_unrecognized = true;
    let mut scanner = config.build("1 @ 2").unwrap();
    let tokens: Vec<Token> = scanner.tokens().map(|t| t.token).collect();
    assert_eq!(tokens, vec![Token::DIGITS, Token::UNRECOGNIZED, Token::DIGITS]);
}

#[test]
fn scanners_are_independent() {
    let mut a = calc_scanner("let");
    let mut b = Scanner::new("let", ScanFlags::empty());
    assert_eq!(a.scan(), LET);
    assert_eq!(b.scan(), Token::IDENTIFIER);
}

#[test]
fn cloned_scanner_resumes_from_same_position() {
    let mut scanner = calc_scanner("let a = 1");
    scanner.scan();
    let fork = scanner.clone();
    assert_eq!(stream(scanner), stream(fork));
}

#[test]
fn init_tracing_is_idempotent() {
    lx::init_tracing();
    lx::init_tracing();
    let mut scanner = calc_scanner("let");
    assert_eq!(scanner.scan(), LET);
}
