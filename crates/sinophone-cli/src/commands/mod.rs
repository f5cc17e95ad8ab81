pub mod collocations;
pub mod inventory;
pub mod render;

use std::path::Path;

use clap::Args;
use sinophone_core::render::DisplayOptions;
use sinophone_core::{load_definition, Phonology};

/// Presentation overrides shared by every subcommand
#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Output language code (en-Latn or wuu-Hant)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,
}

impl DisplayArgs {
    /// Layer the command-line flags over the definition's display settings
    pub fn apply(&self, options: &mut DisplayOptions) -> Result<(), Box<dyn std::error::Error>> {
        if self.no_color {
            options.color = false;
        }
        if let Some(code) = &self.lang {
            options.set_language(code)?;
        }
        Ok(())
    }
}

/// Load, validate and refresh the phonology described by `path`
pub fn load_phonology(
    path: &Path,
) -> Result<(Phonology, DisplayOptions), Box<dyn std::error::Error>> {
    let definition = load_definition(path)?;
    Ok(definition.build()?)
}
