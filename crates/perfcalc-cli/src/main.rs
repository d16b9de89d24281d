// crates/perfcalc-cli/src/main.rs

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

mod cmd;
mod io;

use io::api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_CACHE_DIR};

#[derive(Parser)]
#[command(name = "perfcalc-cli")]
#[command(about = "osu! difficulty and performance calculator", long_about = None)]
pub struct Cli {
    /// Directory holding downloaded .osu files
    #[arg(long, global = true, env = "PERFCALC_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// osu! web/API base url
    #[arg(long, global = true, env = "PERFCALC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the difficulty of a beatmap or a directory of beatmaps
    Difficulty(cmd::difficulty::DifficultyArgs),

    /// Compute the pp of a play given its hit counts
    Performance(cmd::performance::PerformanceArgs),

    /// Recompute a player's top plays and compare them with live values
    Profile(cmd::profile::ProfileArgs),

    /// Simulate a play from an accuracy target and compute its pp
    #[command(alias = "simulate-listing")]
    Simulate(cmd::simulate::SimulateCmd),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    let api = ApiConfig {
        base_url: cli.base_url,
        cache_dir: cli.cache_dir,
    };

    let Some(command) = cli.cmd else {
        println!("You must specify a subcommand.");
        println!();
        println!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    match command {
        Commands::Difficulty(args) => cmd::difficulty::run(args),
        Commands::Performance(args) => cmd::performance::run(args),
        Commands::Profile(args) => cmd::profile::run(args, &api),
        Commands::Simulate(args) => cmd::simulate::run(args),
    }
}
