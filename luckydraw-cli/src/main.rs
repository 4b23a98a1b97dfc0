mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "luckydraw")]
#[command(about = "Admin tool for the lucky draw service")]
#[command(version)]
struct Cli {
    /// Base URL of the running service
    #[arg(short, long, global = true, default_value = "http://localhost:5000")]
    url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the fixed first winner
    Set {
        /// Winner number
        number: u32,
    },

    /// Perform one draw
    Get,

    /// Clear the winner slot
    Reset,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "luckydraw_cli={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = reqwest::Client::new();
    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Set { number } => commands::handle_set(&client, base_url, number).await,
        Commands::Get => commands::handle_get(&client, base_url).await,
        Commands::Reset => commands::handle_reset(&client, base_url).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
