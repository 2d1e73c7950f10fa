//! Client bookkeeping for the word game server
//!
//! This module tracks every connected client in one of two ordered lists:
//! - Pending: connected, but no accepted name yet
//! - Active: named players taking part in turn rotation
//!
//! A client lives in exactly one list at a time. Promotion moves the
//! [`Client`] value from Pending to Active, so there is never a second copy.
//! Insertion order of the Active list is the turn rotation order.

use log::{debug, info};
use shared::{LineBuffer, LineError};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::sync::mpsc;

/// Connection identity, assigned by the multiplexer when a connection is
/// accepted and never reused while the process runs.
pub type ClientId = u32;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("connection to client {0} is closed")]
pub struct ConnectionClosed(pub ClientId);

/// Outbound half of a client connection
///
/// Messages are queued on a channel drained by the connection's writer task.
/// Once that task has gone away every send fails, which is how a dead socket
/// surfaces to the game.
#[derive(Debug)]
pub struct Connection {
    outbound: mpsc::UnboundedSender<String>,
}

impl Connection {
    pub fn new(outbound: mpsc::UnboundedSender<String>) -> Self {
        Self { outbound }
    }
}

/// A connected client and its protocol state
#[derive(Debug)]
pub struct Client {
    /// Connection identity used for every lookup
    pub id: ClientId,
    /// Remote address, for logging
    pub addr: SocketAddr,
    /// Display name, empty while the client is Pending
    pub name: String,
    inbound: LineBuffer,
    connection: Connection,
}

impl Client {
    pub fn new(id: ClientId, addr: SocketAddr, connection: Connection) -> Self {
        Self {
            id,
            addr,
            name: String::new(),
            inbound: LineBuffer::new(),
            connection,
        }
    }

    /// Queues `text` for delivery to this client.
    pub fn send(&self, text: &str) -> Result<(), ConnectionClosed> {
        self.connection
            .outbound
            .send(text.to_string())
            .map_err(|_| ConnectionClosed(self.id))
    }

    /// Feeds the bytes of one read into the client's line buffer.
    pub fn receive(&mut self, bytes: &[u8]) -> Result<Option<String>, LineError> {
        self.inbound.push(bytes)
    }
}

/// One ordered registry of clients
///
/// Entries keep their insertion order; removal works the same whether the
/// client is the oldest, the newest, somewhere in between or the only entry.
#[derive(Debug, Default)]
pub struct ClientList {
    clients: Vec<Client>,
}

impl ClientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `client` as the newest entry.
    pub fn insert(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn find(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn find_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.id == id)
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.find(id).is_some()
    }

    /// Position of `id` counted from the oldest entry.
    pub fn position(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|client| client.id == id)
    }

    /// Unlinks the client and hands it back to the caller, who decides when
    /// its connection is released.
    pub fn remove(&mut self, id: ClientId) -> Option<Client> {
        let index = self.position(id)?;
        Some(self.clients.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Client> {
        self.clients.get(index)
    }

    /// Case-sensitive name lookup.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.clients.iter().any(|client| client.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Identities in insertion order.
    pub fn ids(&self) -> Vec<ClientId> {
        self.clients.iter().map(|client| client.id).collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// Which registry currently owns a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Pending,
    Active,
}

/// Owns the Pending and Active registries
///
/// Keeps the two lists disjoint: every operation that moves a client takes it
/// out of one list before putting it into the other.
#[derive(Debug, Default)]
pub struct ClientManager {
    pending: ClientList,
    active: ClientList,
}

impl ClientManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly accepted client as Pending.
    pub fn add_pending(&mut self, client: Client) {
        info!("Adding client {} from {}", client.id, client.addr);
        self.pending.insert(client);
    }

    /// Looks the client up in Active first, then in Pending.
    pub fn membership(&self, id: ClientId) -> Option<Membership> {
        if self.active.contains(id) {
            Some(Membership::Active)
        } else if self.pending.contains(id) {
            Some(Membership::Pending)
        } else {
            None
        }
    }

    /// Moves a Pending client into Active under `name`
    ///
    /// Returns false if the client is not Pending. The client becomes the
    /// newest Active entry.
    pub fn promote(&mut self, id: ClientId, name: &str) -> bool {
        match self.pending.remove(id) {
            Some(mut client) => {
                client.name = name.to_string();
                info!("Client {} joined the game as {}", id, name);
                self.active.insert(client);
                true
            }
            None => false,
        }
    }

    /// Unlinks the client from whichever registry holds it.
    pub fn remove(&mut self, id: ClientId) -> Option<(Membership, Client)> {
        if let Some(client) = self.active.remove(id) {
            return Some((Membership::Active, client));
        }
        if let Some(client) = self.pending.remove(id) {
            return Some((Membership::Pending, client));
        }
        debug!("Trying to remove client {}, but it is not registered", id);
        None
    }

    pub fn find(&self, id: ClientId) -> Option<&Client> {
        self.active.find(id).or_else(|| self.pending.find(id))
    }

    pub fn find_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        match self.active.find_mut(id) {
            Some(client) => Some(client),
            None => self.pending.find_mut(id),
        }
    }

    pub fn pending(&self) -> &ClientList {
        &self.pending
    }

    pub fn active(&self) -> &ClientList {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Case-sensitive scan of Active names.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.active.name_in_use(name)
    }
}
