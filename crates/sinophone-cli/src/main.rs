//! Sinophone CLI
//!
//! Command-line interface for inspecting phonology definition files

use clap::{Parser, Subcommand};
use sinophone_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sinophone")]
#[command(about = "Sinophone - Chinese syllable phonology", long_about = None)]
struct Cli {
    /// Write development logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print initials, finals, tones and leaf phonemes
    Inventory(commands::inventory::InventoryArgs),
    /// Print every Initial x Final x Tone combination
    Collocations(commands::collocations::CollocationsArgs),
    /// Render a single syllable through the phonology
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Inventory(args) => commands::inventory::execute(args),
        Commands::Collocations(args) => commands::collocations::execute(args),
        Commands::Render(args) => commands::render::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
