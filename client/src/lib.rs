//! # Word Game Client Library
//!
//! A plain terminal client for the word game server. It does no game logic of
//! its own: whatever the server sends is printed as it arrives, and every line
//! typed on standard input is sent on with the network newline the protocol
//! expects.
//!
//! ## Module Organization
//!
//! ### Network Module (`network`)
//! Connection setup and the relay between the socket and the terminal.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::network::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("127.0.0.1:52061").await?;
//!     client.run().await?;
//!     Ok(())
//! }
//! ```

pub mod network;
