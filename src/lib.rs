//! itlogbook library root.
//! Exposes the CLI parser, the dispatcher and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg, cli.json),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg, cli.json),
        Commands::Home { .. } => commands::home::handle(&cli.command, cfg, cli.json),
        Commands::Backup { action } => commands::backup::handle(action, cfg, cli.json),
        Commands::Logbook { action } => commands::logbook::handle(action, cfg, cli.json),
    }
}

/// Diagnostics go to stderr: `warn` by default, `debug` with `--verbose`,
/// `RUST_LOG` wins over both.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "itlogbook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Load the configuration once, apply `--db`, and run the command.
pub fn run(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");
    dispatch(cli, &cfg)
}
