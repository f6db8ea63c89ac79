use clap::Parser;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use taskpad_cli::commands::Command;
use taskpad_store::{DEFAULT_BASE_URL, HttpStore, StoreError};

/// Environment variable name for the task store base URL
const TPD_URL_ENV: &str = "TPD_URL";

/// Taskpad - a todo list client backed by a remote HTTP store
#[derive(Parser)]
#[command(name = "tpd")]
#[command(version = "0.1.0")]
#[command(about = "A todo list client backed by a remote HTTP store", long_about = None)]
struct Args {
    /// Base URL of the task store (can also be set via TPD_URL env var)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the store base URL from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --url argument
/// 2. TPD_URL environment variable (if non-empty)
/// 3. Default (http://localhost:8080)
fn resolve_base_url(cli_url: Option<String>) -> String {
    // First priority: explicit command line argument
    if let Some(url) = cli_url {
        return url;
    }

    // Second priority: environment variable (if set and non-empty)
    if let Ok(env_url) = std::env::var(TPD_URL_ENV)
        && !env_url.is_empty()
    {
        return env_url;
    }

    // Third priority: default
    DEFAULT_BASE_URL.to_string()
}

/// Initialize logging based on the default tracing environment filter
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=warn` - show warn and above (the fallback)
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> Result<(), StoreError> {
    let args = Args::parse();
    run_with_args(&args).await
}

/// Run the application with the given arguments
async fn run_with_args(args: &Args) -> Result<(), StoreError> {
    // Determine the store base URL using priority: CLI arg > env var > default
    let base_url = resolve_base_url(args.url.clone());
    debug!(%base_url, "run_with_args: store configured");
    let store = HttpStore::new(&base_url)?;

    // Run the command or show welcome message
    match &args.command {
        Some(cmd) => {
            let result = cmd.execute(&store).await?;
            println!("{}", result);
        }
        None => {
            println!("Welcome to taskpad!");
            println!("Use 'tpd --help' for usage information.");
        }
    }

    Ok(())
}
