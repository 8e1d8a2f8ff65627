//! Terminal frontend for the Paradise narrative game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "paradise",
    about = "Paradise — answer riddles, earn hints, banish the monster",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a run from onboarding to the wormhole fight
    Play {
        /// RNG seed for a reproducible run
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Load worlds from a JSON file instead of the built-in catalog
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// List the worlds and locations of the catalog
    Worlds {
        /// Load worlds from a JSON file instead of the built-in catalog
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, data } => commands::play::run(seed, data.as_deref()),
        Commands::Worlds { data } => commands::worlds::run(data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
