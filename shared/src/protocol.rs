//! Line framing for the text protocol
//!
//! Reads arrive in arbitrary fragments. A [`LineBuffer`] is fed one read at a
//! time and hands back a complete line once the network newline shows up, so
//! the caller never has to loop on a socket to assemble input.

use crate::{MAX_BUF, NETWORK_NEWLINE};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    #[error("line exceeds {0} bytes before a network newline")]
    Overflow(usize),
}

/// Accumulates bytes for a single client until a `\r\n` terminated line is
/// available.
///
/// Only one line is ever in flight: once a line is returned the buffer is
/// cleared, including anything the peer sent after the terminator.
///
/// A line that fills the buffer without a terminator is rejected as a whole.
/// The rest of it, up to and including its `\r\n`, is dropped as it arrives.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buf: Vec<u8>,
    capacity: usize,
    /// Set after an overflow until the overflowing line's terminator shows up
    discarding: bool,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_BUF)
    }

    /// Creates a buffer that rejects lines of `capacity` bytes or more
    /// (terminator included) without a newline.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            discarding: false,
        }
    }

    /// Appends the bytes of one read and tries to complete a line
    ///
    /// Returns `Ok(None)` while the line is still incomplete. A completed line
    /// is passed through [`sanitize`] before being returned. An overflow is
    /// reported once per rejected line.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Option<String>, LineError> {
        self.buf.extend_from_slice(bytes);

        if self.discarding {
            if find_network_newline(&self.buf).is_some() {
                self.buf.clear();
                self.discarding = false;
            } else {
                self.keep_split_terminator();
            }
            return Ok(None);
        }

        match find_network_newline(&self.buf) {
            Some(end) if end <= self.capacity => {
                let line = sanitize(&self.buf[..end - NETWORK_NEWLINE.len()]);
                self.buf.clear();
                Ok(Some(line))
            }
            Some(_) => {
                self.buf.clear();
                Err(LineError::Overflow(self.capacity))
            }
            None if self.buf.len() >= self.capacity => {
                self.keep_split_terminator();
                self.discarding = true;
                Err(LineError::Overflow(self.capacity))
            }
            None => Ok(None),
        }
    }

    /// Number of bytes waiting for a terminator.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drops buffered bytes but keeps a trailing `\r`, which may be the first
    /// half of a terminator split across reads.
    fn keep_split_terminator(&mut self) {
        let split = self.buf.last() == Some(&b'\r');
        self.buf.clear();
        if split {
            self.buf.push(b'\r');
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns one past the index of the `\n` of the first network newline.
fn find_network_newline(buf: &[u8]) -> Option<usize> {
    buf.windows(2)
        .position(|pair| pair == NETWORK_NEWLINE.as_bytes())
        .map(|i| i + 2)
}

/// Keeps the leading run of ASCII letters and drops everything from the first
/// other byte onwards.
pub fn sanitize(line: &[u8]) -> String {
    line.iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .map(|&b| b as char)
        .collect()
}
