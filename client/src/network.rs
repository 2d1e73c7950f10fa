use log::info;
use shared::{MAX_BUF, NETWORK_NEWLINE};
use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

pub struct Client {
    stream: TcpStream,
    server_addr: SocketAddr,
}

impl Client {
    pub async fn new(server_addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let stream = TcpStream::connect(server_addr).await?;
        let server_addr = stream.peer_addr()?;
        info!("Connected to server at {}", server_addr);

        Ok(Client {
            stream,
            server_addr,
        })
    }

    /// Plays from the terminal until either side hangs up.
    pub async fn run(self) -> io::Result<()> {
        relay(self.stream, tokio::io::stdin(), tokio::io::stdout()).await?;
        info!("Disconnected from {}", self.server_addr);
        Ok(())
    }
}

/// Copies server output to `output` and `input` lines to the server
///
/// Server output is preferred when both sides are ready, so prompts show up
/// before the next typed line goes out. Returns when the server closes the
/// connection or `input` runs dry.
pub async fn relay<S, I, O>(stream: S, input: I, mut output: O) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let (mut server_read, mut server_write) = tokio::io::split(stream);
    let mut lines = BufReader::new(input).lines();
    let mut buffer = [0u8; MAX_BUF];

    loop {
        tokio::select! {
            biased;

            read = server_read.read(&mut buffer) => {
                let len = read?;
                if len == 0 {
                    info!("Server closed the connection");
                    return Ok(());
                }
                output.write_all(&buffer[..len]).await?;
                output.flush().await?;
            },

            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        server_write.write_all(to_network_line(&line).as_bytes()).await?;
                    }
                    None => {
                        info!("End of input, closing connection");
                        server_write.shutdown().await?;
                        return Ok(());
                    }
                }
            },
        }
    }
}

/// Terminates a typed line with the network newline, whatever ending the
/// terminal gave it.
pub fn to_network_line(line: &str) -> String {
    format!("{}{}", line.trim_end_matches(['\r', '\n']), NETWORK_NEWLINE)
}
