//! rmigrate library root.
//! Exposes the CLI parser, the high-level run() function and the migration
//! engine (discovery, reconciliation, execution) for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, FileConfig};
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Up { dry_run, .. } => cli::commands::up::handle(cfg, *dry_run),
        Commands::Status { json, .. } => cli::commands::status::handle(cfg, *json),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // A second init (library embedding) is harmless.
    let _ = builder.format_timestamp(None).try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let file = FileConfig::load(cli.config.as_deref().map(Path::new))?;
    let target = cli.command.target();
    let cfg = Config::resolve(
        target.db.as_deref(),
        target.migrations.as_deref(),
        target.table.as_deref(),
        file,
    )?;

    log::debug!("resolved configuration: {cfg:?}");

    dispatch(&cli, &cfg)
}
