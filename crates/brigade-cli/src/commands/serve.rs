//! Serve command - run the JSON API.

use std::path::PathBuf;

use brigade::MenuDataset;
use colored::Colorize;

use crate::config::BrigadeConfig;
use crate::server::{app, state::AppState};

pub fn run(
    data: Option<PathBuf>,
    config: BrigadeConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data_path = super::resolve_data_path(data, &config);
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let menu = MenuDataset::load_or_sample(&data_path);
    let state = AppState::new(menu, config.defaults);

    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Starting advisor API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Menu: {} ({} items)", data_path.display(), state.menu.len());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, &host, port).await
    })
}
