//! Activity signup server entry point

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use activities_server::{ActivityResult, ActivityServer, InMemoryActivityStore};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "activities-server")]
#[command(about = "Extracurricular activity signup server")]
struct Args {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for the HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Static files directory for the browser frontend
    #[arg(long, default_value = "./static")]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ActivityResult<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let addr = SocketAddr::new(args.host, args.port);
    let store = InMemoryActivityStore::new();
    let server = ActivityServer::new(store, args.static_dir);

    server.run(addr).await
}
