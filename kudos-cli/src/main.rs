//! Kudos CLI - Command line interface for Kudos
//!
//! Submit, list, and reconcile site reviews kept in a local store.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kudos_core::{Backend, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ContactArgs, HydrateArgs, ListArgs, StatsArgs, SubmitArgs};

/// Kudos: review storage with remote seed reconciliation
#[derive(Parser, Debug)]
#[command(name = "kudos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Location of the review store (overrides config and env)
    #[arg(long, global = true, env = "KUDOS_STORE_PATH")]
    store: Option<PathBuf>,

    /// Store backend: file or sqlite (overrides config and env)
    #[arg(long, global = true, env = "KUDOS_BACKEND")]
    backend: Option<Backend>,

    /// Remote seed location (overrides config and env)
    #[arg(long, global = true, env = "KUDOS_REMOTE_URL")]
    remote_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Submit a review
    #[command(visible_alias = "s")]
    Submit(SubmitArgs),

    /// List stored reviews
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show the rating summary
    Stats(StatsArgs),

    /// Merge the remote review seed into the local store
    Hydrate(HydrateArgs),

    /// Validate and send a contact message
    Contact(ContactArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.store.clone(), cli.backend, cli.remote_url.clone())?;

    if cli.verbose {
        tracing::info!(
            backend = %config.store.backend,
            path = ?config.store.path,
            remote = ?config.remote.url,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("kudos {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Submit(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::List(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Stats(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Hydrate(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Contact(args)) => {
            args.execute(cli.verbose).await?;
        }
        Some(Commands::Config) => {
            println!("Kudos Configuration");
            println!("===================");
            println!();
            println!("Store Settings:");
            println!("  backend: {}", config.store.backend);
            match config.store.resolved_path() {
                Ok(path) => println!("  path: {}", path.display()),
                Err(e) => println!("  path: (unavailable: {})", e),
            }
            println!("  key: {}", config.store.key);
            println!();
            println!("Remote Settings:");
            println!("  url: {}", config.remote.url.as_deref().unwrap_or("(none)"));
            println!("  timeout: {:?}", config.remote.timeout);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Kudos - review storage with remote seed reconciliation");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
