mod commands;
mod config;

use crate::config::{ArenaConfig, Overrides};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML run configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Every species plays every other once
    RoundRobin {
        #[arg(long)]
        json: bool,
    },

    /// Evolve a mixed population generation by generation
    Ess,

    /// List the available species
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::debug!("{args:#?}");

    match args.command {
        Command::RoundRobin { json } => {
            let config = load_config(args.config.as_deref(), &args.overrides)?;
            commands::round_robin::run(&config, json)?
        }
        Command::Ess => {
            let config = load_config(args.config.as_deref(), &args.overrides)?;
            commands::ess::run(&config)?
        }
        Command::List { json } => commands::list::run(json)?,
    }

    Ok(())
}

fn load_config(file: Option<&Path>, overrides: &Overrides) -> Result<ArenaConfig> {
    let config =
        ArenaConfig::load(file, overrides).context("failed to load config")?;
    log::info!("{config:#?}");
    Ok(config)
}
