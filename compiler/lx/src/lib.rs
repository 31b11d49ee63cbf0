//! Configurable lexical scanner.
//!
//! The token rules are supplied at runtime: reserved words and multi-character
//! symbols go into precedence-ordered tables, and [`ScanFlags`] switch digit,
//! string and comment handling on or off. Each [`Scanner::scan`] call yields
//! one [`Token`]; the matched text is available as a zero-copy [`TokenSpan`].
//!
//! ```
//! use lx::{ScanFlags, Scanner, Token};
//!
//! let mut scanner = Scanner::new("let x = 10", ScanFlags::DIGITS);
//! scanner.reserve("let", 0, Token::new(100)).unwrap();
//! scanner.register_symbol("=", 0, Token::new(200)).unwrap();
//!
//! assert_eq!(scanner.scan(), Token::new(100));
//! assert_eq!(scanner.scan(), Token::IDENTIFIER);
//! assert_eq!(scanner.span().as_str(), "x");
//! assert_eq!(scanner.scan(), Token::new(200));
//! assert_eq!(scanner.scan(), Token::DIGITS);
//! assert_eq!(scanner.scan(), Token::END_OF_FILE);
//! ```
//!
//! [`Scanner::tokens`] iterates the same stream as [`ScannedToken`]s.
//!
//! Flags and tables can also come from a serialized [`ScannerConfig`].

mod config;
mod error;
mod flags;
mod scanner;
mod table;
mod token;

pub use config::{EntryConfig, ScannerConfig};
pub use error::{EntryKind, RegisterError};
pub use flags::ScanFlags;
pub use lx_core::{TextBuffer, TokenSpan};
pub use scanner::{ScannedToken, Scanner, Tokens};
pub use table::Entry;
pub use token::Token;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times, and leaves an already installed global
/// subscriber in place. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lx=debug` for registrations and unterminated strings, or
/// `RUST_LOG=lx=trace` for one event per scanned token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            // The host already owns the global subscriber; lx events go there.
            if let Err(err) = installed {
                tracing::debug!(%err, "keeping existing tracing subscriber");
            }
        }
    });
}
