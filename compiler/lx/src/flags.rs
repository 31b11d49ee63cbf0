//! Feature switches for the scanner.

use bitflags::bitflags;

bitflags! {
    /// Optional recognizers and trivia handling, fixed at scanner creation.
    ///
    /// Symbol and identifier recognition are always on; everything else is
    /// opt-in. Bit values are part of the embedding contract.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ScanFlags: u32 {
        /// Recognize numerals as [`Token::DIGITS`](crate::Token::DIGITS).
        const DIGITS = 1 << 0;
        /// Recognize double-quoted literals as [`Token::STRING`](crate::Token::STRING).
        const STRINGS = 1 << 1;
        /// Inside strings, a backslash escapes the next character.
        /// Has no effect without [`STRINGS`](Self::STRINGS).
        const STRING_ESCAPES = 1 << 2;
        /// Skip `#` comments up to the end of the line.
        const POUND_COMMENTS = 1 << 3;
        /// Emit [`Token::UNRECOGNIZED`](crate::Token::UNRECOGNIZED) for a
        /// character no recognizer accepts, instead of ending the stream.
        const REPORT_UNRECOGNIZED = 1 << 4;
    }
}
