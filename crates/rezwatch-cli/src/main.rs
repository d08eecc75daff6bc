mod commands;
mod scheduler;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rezwatch_core::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::hex_utils::parse_hex_address;

#[derive(Parser)]
#[command(name = "rezwatch")]
#[command(about = "Tracks who is resurrecting whom in the party", version)]
struct Args {
    #[arg(short, long, default_value = "rezwatch.toml", global = true)]
    config: PathBuf,

    /// Actor table address (hex), overrides the config file
    #[arg(long, env = "REZWATCH_TABLE_ADDRESS", value_parser = parse_hex_address, global = true)]
    table_address: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan every frame and report revivals as they change (default)
    Watch {
        /// Milliseconds between scans
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Scan once and print the result as JSON
    Snapshot {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the local player's job and level
    Player,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so snapshot output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("rezwatch=info".parse()?)
                .add_directive("rezwatch_core=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let load = || -> Result<Config> {
        let mut config = load_config(&args.config)?;
        if let Some(address) = args.table_address {
            config.table_address = address;
        }
        Ok(config)
    };

    match args.command.unwrap_or(Command::Watch { interval_ms: None }) {
        Command::Watch { interval_ms } => commands::watch::run(&load()?, interval_ms),
        Command::Snapshot { output } => commands::snapshot::run(&load()?, output.as_deref()),
        Command::Player => commands::player::run(&load()?),
        Command::InitConfig { force } => commands::init_config::run(&args.config, force),
    }
}

/// Load the config file; a missing file means defaults
fn load_config(path: &Path) -> Result<Config> {
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            Ok(config)
        }
        Err(e) if e.is_not_found() => {
            warn!("Config file {:?} not found, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}
