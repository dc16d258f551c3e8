//! Brigade CLI - cooking and preparation advice for an Italian menu.

mod cli;
mod commands;
mod config;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Session;
use config::BrigadeConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = BrigadeConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let filter = cli.filters.to_filter();
    let session = |config| Session::open(cli.data.clone(), &filter, config, cli.json, cli.verbose);

    match cli.command {
        Commands::Menu { by_category } => commands::menu::run(session(config), by_category),

        Commands::Daily { day, customers } => {
            commands::daily::run(session(config), day, customers)
        }

        Commands::Event {
            event,
            guests,
            season,
        } => commands::event::run(session(config), event, guests, season),

        Commands::Season { season, weeks } => {
            commands::season::run(session(config), season, weeks)
        }

        Commands::Quick {
            situation,
            severity,
            hour,
        } => commands::quick::run(situation, severity, hour, cli.json),

        Commands::Strategy => commands::strategy::run(session(config)),

        Commands::Items => commands::items::run(session(config)),

        Commands::Serve { host, port } => commands::serve::run(cli.data, config, host, port),
    }
}

/// Install the stderr log subscriber. `BRIGADE_LOG` takes precedence over the
/// level implied by `--quiet` / `--verbose`.
fn init_tracing(quiet: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("BRIGADE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
