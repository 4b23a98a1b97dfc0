//! Lucky draw HTTP service.
//!
//! All state lives in one in-memory winner slot, so the service must run
//! as a single process; multiple workers would each hold their own slot
//! and break the one-fixed-winner guarantee.

use clap::Parser;
use luckydraw_server::routes;
use luckydraw_core::{DrawConfig, DrawService, WinnerStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "luckydraw-server")]
#[command(about = "Lucky draw winner service")]
#[command(version)]
struct Cli {
    /// Listening port; falls back to the PORT env var, then 5000
    #[arg(short, long)]
    port: Option<u16>,

    /// Lower bound of the random fallback window (inclusive)
    #[arg(long, default_value_t = 2000)]
    random_min: u32,

    /// Upper bound of the random fallback window (inclusive)
    #[arg(long, default_value_t = 2500)]
    random_max: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_port(cli_port: Option<u16>) -> u16 {
    cli_port
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "luckydraw_core={},luckydraw_server={},tower_http={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DrawConfig::new(cli.random_min, cli.random_max)?;
    let store = Arc::new(WinnerStore::new());
    let service = Arc::new(DrawService::new(store, config));

    let app = routes::router(service).layer(TraceLayer::new_for_http());

    let port = resolve_port(cli.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
