//! # Word Game Server Library
//!
//! This library implements the server for a multiplayer word-guessing game.
//! Players connect over TCP, pick a name, and take turns guessing the letters
//! of a hidden word. Everyone in the game sees every guess.
//!
//! ## Core Responsibilities
//!
//! ### Connection Handling
//! Accepts TCP connections and moves bytes between sockets and the game.
//! Each connection gets a reader task and a writer task; neither touches
//! game state.
//!
//! ### Client Management
//! Tracks clients in two registries:
//! - Pending clients have connected but not yet picked an acceptable name
//! - Active clients are named players who take turns
//!
//! ### Game Rules
//! Validates guesses, reveals letters, counts down the remaining guesses,
//! rotates the turn, and starts a new round as soon as one is won or lost.
//!
//! ## Architecture Design
//!
//! ### Single Owner of Game State
//! All game state lives in one [`session::GameSession`] owned by the server
//! loop. Connection tasks report what happened through a channel and the loop
//! applies the events one at a time. There are no locks around game state
//! and no event ever observes another one half-done.
//!
//! ### Incremental Line Decoding
//! Every read is handed to the session as soon as it arrives. The client's
//! line buffer keeps partial input between reads, so a client that sends a
//! line in pieces never holds up anyone else.
//!
//! ### Failure Isolation
//! A client whose connection breaks is removed on its own. Removal repairs
//! the turn pointer before the client leaves the Active list, so the game
//! keeps going with whoever is left.
//!
//! ## Module Organization
//!
//! ### Client Manager Module (`client_manager`)
//! Client records and the Pending/Active registries.
//!
//! ### Dictionary Module (`dictionary`)
//! The in-memory word list secret words are drawn from.
//!
//! ### Game Module (`game`)
//! Round state: secret word, reveal mask, guessed letters, remaining guesses
//! and the turn pointer.
//!
//! ### Session Module (`session`)
//! Name and guess handlers, broadcast, and disconnect handling.
//!
//! ### Network Module (`network`)
//! Listener setup, the accept/dispatch loop, and per-connection I/O tasks.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::dictionary::Dictionary;
//! use server::game::GameRules;
//! use server::network::Server;
//! use server::session::GameSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dictionary = Dictionary::load("words.txt")?;
//!     let session = GameSession::new(dictionary, GameRules { max_guesses: 4 })?;
//!
//!     // Listen on all interfaces with a backlog of 5 pending connections
//!     let server = Server::new("0.0.0.0:52061", 5, session).await?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client_manager;
pub mod dictionary;
pub mod game;
pub mod network;
pub mod session;
