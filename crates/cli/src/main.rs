//! Graft CLI — the main entry point.
//!
//! Commands:
//! - `onboard`  — Initialize config & starter knowledge file
//! - `serve`    — Start the HTTP gateway
//! - `ask`      — One-shot question against the knowledge base
//! - `sections` — Show how the corpus scores against a query

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "graft",
    about = "Graft — knowledge-grounded chat gateway",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and a starter knowledge file
    Onboard,

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question, grounded in the knowledge base
    Ask {
        /// The question to ask
        message: String,
    },

    /// Score every knowledge section against a query
    Sections {
        /// The query to score against
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask { message } => commands::ask::run(message).await?,
        Commands::Sections { query } => commands::sections::run(query).await?,
    }

    Ok(())
}
