//! Scanning primitives for `lx`.
//!
//! Standalone building blocks with no knowledge of tokens or tables:
//!
//! - [`Cursor`]: `Copy` byte cursor over borrowed source, `0x00` at end of input
//! - [`TextBuffer`]: growable, terminated accumulator for the current token
//! - [`TokenSpan`]: zero-copy view of matched source text
//!
//! The scanning engine itself lives in the `lx` crate.

mod cursor;
mod span;
mod text_buffer;

pub use cursor::Cursor;
pub use span::TokenSpan;
pub use text_buffer::TextBuffer;
