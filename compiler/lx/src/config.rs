//! Declarative scanner setup.
//!
//! [`ScannerConfig`] describes the feature flags and both tables in a form
//! serde can read, so a language front end can ship its token rules as data
//! instead of a sequence of registration calls.
//!
//! ```json
//! {
//!   "digits": true,
//!   "lexemes": [{ "text": "let", "token": 100 }],
//!   "symbols": [
//!     { "text": "<=", "precedence": 0, "token": 201 },
//!     { "text": "<", "precedence": 1, "token": 200 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{RegisterError, ScanFlags, Scanner, Token};

/// Flags and tables for a [`Scanner`]. Every field is optional.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    pub digits: bool,
    pub strings: bool,
    pub string_escapes: bool,
    pub pound_comments: bool,
    pub report_unrecognized: bool,
    pub lexemes: Vec<EntryConfig>,
    pub symbols: Vec<EntryConfig>,
}

/// One table entry as written in a config.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    pub text: String,
    #[serde(default)]
    pub precedence: i32,
    pub token: i32,
}

impl ScannerConfig {
    /// The flag set the boolean switches describe.
    pub fn flags(&self) -> ScanFlags {
        let mut flags = ScanFlags::empty();
        flags.set(ScanFlags::DIGITS, self.digits);
        flags.set(ScanFlags::STRINGS, self.strings);
        flags.set(ScanFlags::STRING_ESCAPES, self.string_escapes);
        flags.set(ScanFlags::POUND_COMMENTS, self.pound_comments);
        flags.set(ScanFlags::REPORT_UNRECOGNIZED, self.report_unrecognized);
        flags
    }

    /// Create a scanner over `source` and register every entry.
    ///
    /// Lexemes are registered before symbols, each list in order. The first
    /// rejected entry aborts the build.
    pub fn build<'src>(&self, source: &'src str) -> Result<Scanner<'src>, RegisterError> {
        let mut scanner = Scanner::new(source, self.flags());
        for entry in &self.lexemes {
            scanner.reserve(&entry.text, entry.precedence, Token::new(entry.token))?;
        }
        for entry in &self.symbols {
            scanner.register_symbol(&entry.text, entry.precedence, Token::new(entry.token))?;
        }
        Ok(scanner)
    }
}
