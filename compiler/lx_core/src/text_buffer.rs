//! Growable, terminated text buffer.
//!
//! The scanner assembles the text of the token it is matching here, one
//! byte at a time. The buffer is cleared (not freed) between tokens, so a
//! long scan settles on a single allocation sized for its longest token.
//!
//! # Layout
//!
//! ```text
//! [content..., 0x00, spare capacity...]
//!  ^           ^
//!  0           len (terminator)
//! ```
//!
//! # Growth
//!
//! Capacity only grows. When the content plus terminator plus one slack byte
//! would no longer fit, capacity becomes `capacity * 2 + 2`. Allocation
//! failure is fatal: the global allocator aborts the process.

/// Append-only byte accumulator with a trailing `0x00` terminator.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    /// Content followed by the terminator. Empty until the first push.
    buf: Vec<u8>,
}

/// Terminated view of a buffer that has never been written to.
const EMPTY: &[u8] = &[0];

impl TextBuffer {
    /// Create an empty buffer. Does not allocate.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append one byte and re-terminate.
    pub fn push(&mut self, byte: u8) {
        let new_len = self.len() + 1;
        if new_len + 2 > self.buf.capacity() {
            let target = self.buf.capacity() * 2 + 2;
            self.buf.reserve_exact(target - self.buf.len());
        }
        match self.buf.last_mut() {
            // Overwrite the old terminator.
            Some(last) => *last = byte,
            None => self.buf.push(byte),
        }
        self.buf.push(0);
    }

    /// Reset the logical length to zero, keeping the allocation.
    pub fn clear(&mut self) {
        if !self.buf.is_empty() {
            self.buf.clear();
            self.buf.push(0);
        }
    }

    /// Shorten the content to `len` bytes. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.buf.truncate(len);
            self.buf.push(0);
        }
    }

    /// Content bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Content bytes followed by the `0x00` terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.buf.is_empty() {
            EMPTY
        } else {
            &self.buf
        }
    }

    /// Logical length of the content.
    pub fn len(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated capacity in bytes, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}
