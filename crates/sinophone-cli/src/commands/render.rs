//! Render command
//!
//! Usage: sinophone render <FILE> --nucleus <N> [--initial <I>] [--medial <M>]
//! [--coda <C>] [--tone <T>] [--json]

use clap::Args;
use sinophone_core::render::{acceptability_repr, rendered_syllable_str};
use sinophone_core::Syllable;
use std::path::PathBuf;

use super::{load_phonology, DisplayArgs};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Phonology definition file (TOML)
    pub file: PathBuf,

    /// Initial consonant (empty for a zero initial)
    #[arg(long, default_value = "")]
    pub initial: String,

    #[arg(long, default_value = "")]
    pub medial: String,

    #[arg(long)]
    pub nucleus: String,

    #[arg(long, default_value = "")]
    pub coda: String,

    /// Tone letters, e.g. ˥˥
    #[arg(long, default_value = "")]
    pub tone: String,

    /// Emit the rendered syllable as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (phonology, mut options) = load_phonology(&args.file)?;
    args.display.apply(&mut options)?;

    let syllable = Syllable::parse(
        &args.initial,
        &args.medial,
        &args.nucleus,
        &args.coda,
        &args.tone,
    )?;
    let rendered = phonology.render_syllable(&syllable);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", rendered_syllable_str(&rendered, &options));
        println!("{}", acceptability_repr(rendered.acceptability(), &options));
    }
    Ok(())
}
