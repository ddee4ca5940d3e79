//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! decode → parse → aggregate pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Events { .. } => cli::commands::events::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `--verbose` forces debug, otherwise RUST_LOG (default warn).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rattendance=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a subscriber may already be installed when run() is called from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&path)?;
    ui::messages::set_color(cfg.color);

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
