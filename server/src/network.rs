//! Server network layer: TCP accept loop and per-connection I/O tasks

use crate::client_manager::{ClientId, Connection};
use crate::session::{Departure, GameSession};
use log::{debug, error, info, warn};
use shared::MAX_BUF;
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),
    #[error("failed to set up listener: {0}")]
    Listen(#[source] io::Error),
    #[error("failed to accept connection: {0}")]
    Accept(#[source] io::Error),
}

/// Messages sent from connection tasks to the main server loop
#[derive(Debug)]
pub enum ServerMessage {
    /// Bytes from a single read
    Received {
        client_id: ClientId,
        bytes: Vec<u8>,
    },
    /// The peer closed its end (zero-length read)
    Closed { client_id: ClientId },
    /// A read or write on the connection failed
    Failed {
        client_id: ClientId,
        error: io::Error,
    },
}

/// Main server: owns the listener, the game session and the set of
/// connections it is waiting on
pub struct Server {
    listener: TcpListener,
    session: GameSession,
    /// Reader task of every tracked connection
    readers: HashMap<ClientId, JoinHandle<()>>,
    next_client_id: ClientId,

    // Communication channel from connection tasks
    server_tx: mpsc::UnboundedSender<ServerMessage>,
    server_rx: mpsc::UnboundedReceiver<ServerMessage>,
}

impl Server {
    /// Binds a listener on `addr` with the given backlog
    ///
    /// The address is reusable right after a previous server on the same port
    /// has exited.
    pub async fn new(addr: &str, backlog: u32, session: GameSession) -> Result<Self, ServerError> {
        let addr: SocketAddr = addr.parse()?;
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(ServerError::Listen)?;
        socket.set_reuseaddr(true).map_err(ServerError::Listen)?;
        socket.bind(addr).map_err(ServerError::Listen)?;
        let listener = socket.listen(backlog).map_err(ServerError::Listen)?;
        info!("Server listening on {}", addr);

        let (server_tx, server_rx) = mpsc::unbounded_channel();

        Ok(Server {
            listener,
            session,
            readers: HashMap::new(),
            next_client_id: 1,
            server_tx,
            server_rx,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Main server loop
    ///
    /// Only returns on a failed accept, which is fatal for the process.
    pub async fn run(mut self) -> Result<(), ServerError> {
        info!("Server started successfully");

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, addr) = accepted.map_err(ServerError::Accept)?;
                    self.register(stream, addr);
                },

                message = self.server_rx.recv() => {
                    match message {
                        Some(message) => self.dispatch(message),
                        None => {
                            info!("Server shutting down");
                            break;
                        }
                    }
                },
            }

            self.unregister_released();
        }

        Ok(())
    }

    /// Starts tracking a new connection and hands it to the session as a
    /// Pending client.
    fn register(&mut self, stream: TcpStream, addr: SocketAddr) {
        let client_id = self.next_client_id;
        self.next_client_id += 1;
        info!("New connection accepted from {} as client {}", addr, client_id);

        let (read_half, write_half) = stream.into_split();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        tokio::spawn(write_connection(
            client_id,
            write_half,
            outbound_rx,
            self.server_tx.clone(),
        ));
        let reader = tokio::spawn(read_connection(
            client_id,
            read_half,
            self.server_tx.clone(),
        ));
        self.readers.insert(client_id, reader);

        self.session
            .connect(client_id, addr, Connection::new(outbound_tx));
    }

    /// Stops waiting on connections the session has let go of
    ///
    /// Their writer tasks finish on their own once the outbound channel is
    /// dropped, flushing anything still queued before closing the socket.
    fn unregister_released(&mut self) {
        for client_id in self.session.take_released() {
            if let Some(reader) = self.readers.remove(&client_id) {
                reader.abort();
                debug!("Stopped reading from client {}", client_id);
            }
        }
    }

    /// Routes one connection event to the session.
    fn dispatch(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::Received { client_id, bytes } => {
                debug!("[{}] Read {} bytes", client_id, bytes.len());
                self.session.receive(client_id, &bytes);
            }
            ServerMessage::Closed { client_id } => {
                info!("Client {} closed the connection", client_id);
                self.session.disconnect(client_id, Departure::Left);
            }
            ServerMessage::Failed { client_id, error } => {
                warn!("Connection to client {} failed: {}", client_id, error);
                self.session.disconnect(client_id, Departure::Failed);
            }
        }
    }
}

/// Reads from one connection until it closes or fails
///
/// Every successful read is forwarded as its own event, so the server loop
/// never waits on a single client to finish a line.
pub async fn read_connection<R>(
    client_id: ClientId,
    mut reader: R,
    events: mpsc::UnboundedSender<ServerMessage>,
) where
    R: AsyncRead + Unpin,
{
    let mut buffer = [0u8; MAX_BUF];

    loop {
        let message = match reader.read(&mut buffer).await {
            Ok(0) => ServerMessage::Closed { client_id },
            Ok(len) => ServerMessage::Received {
                client_id,
                bytes: buffer[..len].to_vec(),
            },
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => ServerMessage::Failed { client_id, error },
        };

        let finished = !matches!(message, ServerMessage::Received { .. });
        if let Err(e) = events.send(message) {
            error!("Failed to send event to main loop: {}", e);
            break;
        }
        if finished {
            break;
        }
    }
}

/// Writes queued messages to one connection
///
/// Ends when the session drops the client (the channel closes) or when a
/// write fails, which is reported back to the server loop.
pub async fn write_connection<W>(
    client_id: ClientId,
    mut writer: W,
    mut outbound: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<ServerMessage>,
) where
    W: AsyncWrite + Unpin,
{
    while let Some(text) = outbound.recv().await {
        if let Err(error) = writer.write_all(text.as_bytes()).await {
            if let Err(e) = events.send(ServerMessage::Failed { client_id, error }) {
                error!("Failed to send event to main loop: {}", e);
            }
            return;
        }
    }

    if let Err(e) = writer.shutdown().await {
        debug!("Shutdown of client {} failed: {}", client_id, e);
    }
}
