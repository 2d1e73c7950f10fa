//! Wire protocol shared by the word game server, its terminal client and the
//! integration tests.
//!
//! The protocol is plain text over TCP. Every line in either direction ends
//! with the network newline (`\r\n`), whatever the host's own convention is.

pub mod messages;
pub mod protocol;

pub use protocol::{sanitize, LineBuffer, LineError};

/// Line terminator used on the wire in both directions.
pub const NETWORK_NEWLINE: &str = "\r\n";

/// Per-client receive buffer capacity, terminator included.
pub const MAX_BUF: usize = 256;

/// Longest player name accepted at join time.
pub const MAX_NAME_LEN: usize = 30;

/// Longest dictionary entry the server will play with.
pub const MAX_WORD_LEN: usize = 19;

/// Guesses per round unless configured otherwise.
pub const DEFAULT_MAX_GUESSES: u32 = 4;

/// Placeholder for an unrevealed letter on the board.
pub const MASK_PLACEHOLDER: char = '-';

/// Size of the guessed-letter set.
pub const NUM_LETTERS: usize = 26;
