//! dexdoc - Entry Point
//!
//! Command-line front end for the lookup engine: loads a registry
//! snapshot, resolves the requested symbol, and prints the reply content
//! plus the embed payload as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dexdoc::config::DocsConfig;
use dexdoc::docs::{self, fallback};
use dexdoc::registry::Snapshot;

/// Documentation symbol lookup over a pre-built index snapshot.
#[derive(Parser, Debug)]
#[command(name = "dexdoc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Registry snapshot file (JSON dump of the documentation index).
    #[arg(short, long)]
    registry: PathBuf,

    /// Optional config file overriding library/host defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// What to render for the symbol.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a symbol and print its documentation reply.
    Doc {
        /// The symbol path, e.g. `Bot`, `Bot#run`, or `Bot.new`.
        path: String,
    },
    /// Print the source of a method entry.
    Source {
        /// The method path, e.g. `Bot#run`.
        path: String,
    },
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // Respect RUST_LOG but fall back to the --log-level flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dexdoc={level}")));

    // Logs go to stderr so stdout stays clean for the reply payload
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    let config = match &args.config {
        Some(path) => DocsConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => DocsConfig::default(),
    };

    let snapshot = Snapshot::load(&args.registry)
        .with_context(|| format!("failed to load registry: {}", args.registry.display()))?;

    info!(
        entries = snapshot.len(),
        registry = %args.registry.display(),
        "registry snapshot loaded"
    );

    let (query, result) = match &args.command {
        Command::Doc { path } => (path, docs::lookup(path, &snapshot, &config)),
        Command::Source { path } => (path, docs::source(path, &snapshot, &config)),
    };

    match result {
        Ok(Some(reply)) => {
            println!("{}", reply.content);
            println!(
                "{}",
                serde_json::to_string_pretty(&reply.embed)
                    .context("failed to serialize embed payload")?
            );
        }
        Ok(None) => {
            // No path supplied; answer with a shrug, like a missed lookup.
            println!("{}", fallback::pick(query));
        }
        Err(err) if err.is_recoverable() => {
            info!(error = %err, "lookup failed");
            println!("{} {}", err, fallback::pick(query));
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
