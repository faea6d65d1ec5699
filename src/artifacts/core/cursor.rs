//! Byte cursor used by every object parser
//!
//! The cursor never copies: each take returns a sub-slice of the buffer it was
//! created over and moves the read position forward.

/// Read position over an immutable byte buffer
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, position: 0 }
    }

    /// Take every byte before the first `delimiter` and step over the delimiter
    ///
    /// # Returns
    ///
    /// `None` if the delimiter does not occur in the remaining bytes. The cursor
    /// is left untouched in that case.
    pub fn take_until(&mut self, delimiter: u8) -> Option<&'a [u8]> {
        let remaining = self.remaining();
        let index = remaining.iter().position(|&byte| byte == delimiter)?;

        self.position += index + 1;
        Some(&remaining[..index])
    }

    /// Take the longest prefix whose bytes all satisfy `predicate`
    ///
    /// The first byte failing the predicate stays in place.
    pub fn take_while<P>(&mut self, predicate: P) -> &'a [u8]
    where
        P: Fn(u8) -> bool,
    {
        let remaining = self.remaining();
        let length = remaining
            .iter()
            .position(|&byte| !predicate(byte))
            .unwrap_or(remaining.len());

        self.position += length;
        &remaining[..length]
    }

    /// Take exactly `count` bytes, or nothing if fewer remain
    pub fn take(&mut self, count: usize) -> Option<&'a [u8]> {
        let remaining = self.remaining();
        if remaining.len() < count {
            return None;
        }

        self.position += count;
        Some(&remaining[..count])
    }

    pub fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
