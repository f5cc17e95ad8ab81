//! Collocations command
//!
//! Usage: sinophone collocations <FILE> [--symbolic] [--unacceptable-only] [--json]

use clap::Args;
use sinophone_core::render::pretty_print_syllable;
use sinophone_core::RenderedSyllable;
use std::path::PathBuf;

use super::{load_phonology, DisplayArgs};

#[derive(Debug, Args)]
pub struct CollocationsArgs {
    /// Phonology definition file (TOML)
    pub file: PathBuf,

    /// Show symbolic strings instead of realized ones
    #[arg(long)]
    pub symbolic: bool,

    /// Only list collocations the phonotactics reject
    #[arg(long)]
    pub unacceptable_only: bool,

    /// Emit a JSON array instead of colored lines
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute collocations command
pub fn execute(args: CollocationsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (phonology, mut options) = load_phonology(&args.file)?;
    args.display.apply(&mut options)?;
    if args.symbolic {
        options.phonetic = false;
    }

    let collocations: Vec<RenderedSyllable> = phonology
        .collocations()
        .into_iter()
        .filter(|rendered| !args.unacceptable_only || !rendered.acceptability().is_acceptable())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&collocations)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for rendered in &collocations {
        pretty_print_syllable(&phonology, rendered.syllable(), &options, &mut out);
    }
    Ok(())
}
