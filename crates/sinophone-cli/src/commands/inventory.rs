//! Inventory command
//!
//! Usage: sinophone inventory <FILE> [--no-color] [--lang <CODE>]

use clap::Args;
use sinophone_core::render::{inventory_report, TypeName};
use std::path::PathBuf;

use super::{load_phonology, DisplayArgs};

#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Phonology definition file (TOML)
    pub file: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute inventory command
pub fn execute(args: InventoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (phonology, mut options) = load_phonology(&args.file)?;
    args.display.apply(&mut options)?;

    println!(
        "{}: {}",
        TypeName::Phonology.translated(options.language),
        args.file.display()
    );
    println!("{}", inventory_report(&phonology, &options));
    Ok(())
}
