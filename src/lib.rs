//! hourstats library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{down, ls, out, stats, up};
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;
use utils::period::Period;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    let period = Period::resolve(cli.year, cli.month, &ctx.now);

    match cli.command {
        Some(Commands::Up) => up::handle(ctx, period),
        Some(Commands::Down) => down::handle(ctx),
        Some(Commands::Ls) => ls::handle(ctx, period),
        Some(Commands::Out) => out::handle(ctx, period),
        None => stats::handle(ctx, period),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    // a logger may already be installed when run() is called twice in one process
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2. load config once
    let cfg_path = Config::config_file(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;
    log::debug!("configuration loaded from {}", cfg_path.display());

    // 3. open the store (a --db override is used for this run only)
    let mut ctx = AppContext::open(cfg, cfg_path, cli.db.as_deref())?;

    // 4. hand everything to the dispatcher
    dispatch(&cli, &mut ctx)
}
