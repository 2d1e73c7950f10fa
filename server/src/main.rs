use clap::Parser;
use log::info;
use server::dictionary::Dictionary;
use server::game::GameRules;
use server::network::Server;
use server::session::GameSession;
use shared::DEFAULT_MAX_GUESSES;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line
    dictionary: PathBuf,

    /// Server IP address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "52061")]
    port: u16,

    /// Guesses allowed per round
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES,
          value_parser = clap::value_parser!(u32).range(1..))]
    max_guesses: u32,

    /// Pending connection queue length
    #[arg(long, default_value = "5")]
    backlog: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    let dictionary = Dictionary::load(&args.dictionary)?;
    let rules = GameRules {
        max_guesses: args.max_guesses,
    };
    let session = GameSession::new(dictionary, rules)?;

    let address = format!("{}:{}", args.host, args.port);
    info!("Starting word game server on {}", address);
    info!("{} guesses per round", rules.max_guesses);

    let server = Server::new(&address, args.backlog, session).await?;

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
